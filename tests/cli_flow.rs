//! End-to-end command flows against a mock document store.

use task_tracker::cli::Commands;
use task_tracker::commands::{DELETE_FAILED, execute_command};
use task_tracker::{RestTaskStore, TrackerConfig};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type TestResult = Result<(), Box<dyn std::error::Error>>;

const COLLECTION: &str = r#"{
    "-Na1": {"text":"Doctor Appointment","day":"March 1st at 2:30pm","reminder":true},
    "-Na2": {"text":"Meeting at School","day":"March 3rd at 1:30pm","reminder":false}
}"#;

async fn store_with_collection() -> Result<(MockServer, RestTaskStore), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(COLLECTION))
        .mount(&server)
        .await;

    let config = TrackerConfig::default().with_store_url(Some(server.uri()));
    let store = RestTaskStore::new(&config)?;
    Ok((server, store))
}

#[tokio::test]
async fn list_prints_tasks_in_store_order() -> TestResult {
    let (_server, store) = store_with_collection().await?;

    let output = execute_command(Commands::List, store).await?;

    assert_eq!(
        output,
        "[*] -Na1  Doctor Appointment  (March 1st at 2:30pm)\n\
         [ ] -Na2  Meeting at School  (March 3rd at 1:30pm)"
    );
    Ok(())
}

#[tokio::test]
async fn add_appends_without_refetch() -> TestResult {
    let (server, store) = store_with_collection().await?;
    Mock::given(method("POST"))
        .and(path("/tasks.json"))
        .and(body_json(serde_json::json!({
            "text": "Meeting",
            "day": "Feb 5th",
            "reminder": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "xyz9"})))
        .expect(1)
        .mount(&server)
        .await;

    let command = Commands::Add {
        text: "Meeting".to_string(),
        day: "Feb 5th".to_string(),
        reminder: false,
    };
    let output = execute_command(command, store).await?;

    assert_eq!(output.lines().count(), 3);
    assert!(output.ends_with("[ ] xyz9  Meeting  (Feb 5th)"));
    Ok(())
}

#[tokio::test]
async fn toggle_reads_then_writes_full_record() -> TestResult {
    let (server, store) = store_with_collection().await?;
    Mock::given(method("GET"))
        .and(path("/tasks/-Na2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "text": "Meeting at School",
            "day": "March 3rd at 1:30pm",
            "reminder": false
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/tasks/-Na2.json"))
        .and(body_json(serde_json::json!({
            "text": "Meeting at School",
            "day": "March 3rd at 1:30pm",
            "reminder": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "text": "Meeting at School",
            "day": "March 3rd at 1:30pm",
            "reminder": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = execute_command(Commands::Toggle { id: "-Na2".to_string() }, store).await?;

    assert_eq!(output, "[*] -Na2  Meeting at School  (March 3rd at 1:30pm)");
    Ok(())
}

#[tokio::test]
async fn delete_success_drops_task() -> TestResult {
    let (server, store) = store_with_collection().await?;
    Mock::given(method("DELETE"))
        .and(path("/tasks/-Na1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .expect(1)
        .mount(&server)
        .await;

    let output = execute_command(Commands::Delete { id: "-Na1".to_string() }, store).await?;

    assert_eq!(output, "[ ] -Na2  Meeting at School  (March 3rd at 1:30pm)");
    Ok(())
}

#[tokio::test]
async fn delete_rejected_by_store_fails_command() -> TestResult {
    let (server, store) = store_with_collection().await?;
    Mock::given(method("DELETE"))
        .and(path("/tasks/-Na1.json"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"error": "Permission denied"})),
        )
        .mount(&server)
        .await;

    let result = execute_command(Commands::Delete { id: "-Na1".to_string() }, store).await;

    let message = result.err().map(|e| format!("{e:#}")).unwrap_or_default();
    assert!(message.starts_with(DELETE_FAILED));
    assert!(message.contains("401"));
    Ok(())
}
