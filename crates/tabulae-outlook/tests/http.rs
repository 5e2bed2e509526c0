//! End-to-end checks of the reqwest transport against a local mock server

use mockito::{Matcher, Server};
use serde_json::json;
use tabulae_outlook::{
    Credential, OutgoingAttachment, OutlookClient, OutlookConfig, OutlookError,
};

fn client_for(server: &Server, token: &str) -> OutlookClient {
    OutlookClient::new(
        Credential::new("me@outlook.com", token),
        OutlookConfig::default().base_url(server.url()).timeout_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_sendmail_posts_json_with_bearer() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2.0/me/sendmail")
        .match_header("authorization", "Bearer tok-abc")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "Message": {
                "Subject": "Press release",
                "Body": { "ContentType": "HTML", "Content": "<p>Embargoed</p>" },
                "ToRecipients": [ { "EmailAddress": { "Address": "editor@example.com" } } ]
            }
        })))
        .with_status(202)
        .create_async()
        .await;

    let client = client_for(&server, "tok-abc");
    let result = client
        .send_email("me@outlook.com", "editor@example.com", "Press release", "<p>Embargoed</p>")
        .await;

    assert_eq!(result, Ok(()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_sendmail_with_attachments() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2.0/me/sendmail")
        .match_body(Matcher::PartialJson(json!({
            "Message": {
                "Attachments": [
                    {
                        "@odata.type": "#Microsoft.OutlookServices.FileAttachment",
                        "Name": "hello.txt",
                        "ContentBytes": "aGVsbG8="
                    },
                    {
                        "@odata.type": "#Microsoft.OutlookServices.FileAttachment",
                        "Name": "world.txt",
                        "ContentBytes": "d29ybGQ="
                    }
                ]
            }
        })))
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server, "tok");
    let result = client
        .send_email_with_attachments(
            "me@outlook.com",
            "editor@example.com",
            "Files",
            "<p>two files</p>",
            vec![
                OutgoingAttachment::new("hello.txt", b"hello".to_vec()),
                OutgoingAttachment::new("world.txt", b"world".to_vec()),
            ],
        )
        .await;

    assert_eq!(result, Ok(()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_sendmail_error_envelope_is_generic_failure() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2.0/me/sendmail")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"code":"ErrorInvalidRecipients","message":"At least one recipient is not valid."}}"#)
        .create_async()
        .await;

    let client = client_for(&server, "tok");
    let err = client
        .send_email("me@outlook.com", "not-an-address", "s", "b")
        .await
        .unwrap_err();

    assert_eq!(err, OutlookError::SendFailed);
    assert_eq!(err.to_string(), "Email could not be sent");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_token_never_reaches_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2.0/me/sendmail")
        .with_status(202)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server, "");
    let err = client
        .send_email("me@outlook.com", "editor@example.com", "s", "b")
        .await
        .unwrap_err();

    assert_eq!(err, OutlookError::NoAccessToken);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_refused_is_send_failure() {
    let client = OutlookClient::new(
        Credential::new("me@outlook.com", "tok"),
        OutlookConfig::default()
            .base_url("http://127.0.0.1:1")
            .timeout_secs(2),
    )
    .unwrap();

    assert_eq!(
        client.send_email("me@outlook.com", "editor@example.com", "s", "b").await,
        Err(OutlookError::SendFailed)
    );
}

#[tokio::test]
async fn test_sent_items_search_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2.0/me/MailFolders/sentitems/messages/")
        .match_header("authorization", "Bearer tok")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("$select".into(), "Sender,Subject".into()),
            Matcher::UrlEncoded("$search".into(), "\"subject:Weekly report\"".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"value":[{"Id":"AAMk1","Subject":"Weekly report","Sender":{"EmailAddress":{"Name":"Me","Address":"me@outlook.com"}}}]}"#,
        )
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server, "tok");

    client
        .get_email("editor@example.com", "Weekly report")
        .await
        .unwrap();

    let items = client.search_sent_items("Weekly report").await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "AAMk1");
    assert_eq!(items[0].sender_address(), Some("me@outlook.com"));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_sent_items_unauthorized() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v2.0/me/MailFolders/sentitems/messages/")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"error":{"code":"InvalidAuthenticationToken","message":"Access token has expired."}}"#)
        .create_async()
        .await;

    let client = client_for(&server, "expired");
    assert_eq!(
        client.get_email("editor@example.com", "x").await,
        Err(OutlookError::FetchFailed)
    );
}
