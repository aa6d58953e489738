use super::*;
use bantay_mock::MockChannelAdaptor;
use bantay_traits::Link;
use serde_json::{json, Value};

fn link(rel: &str, href: &str) -> Link {
    Link {
        rel: rel.to_owned(),
        href: href.to_owned(),
    }
}

fn descriptor(workspace_id: Option<String>, links: Vec<Link>) -> WorkspaceDescriptor {
    WorkspaceDescriptor {
        workspace_id,
        links,
    }
}

fn event(event_type: &str, workspace_id: Option<&str>, payload: Value) -> WorkspaceEvent {
    WorkspaceEvent {
        event_type: event_type.to_owned(),
        workspace_id: workspace_id.map(|id| id.to_owned()),
        payload,
    }
}

async fn observe(
    channel: &MockChannelAdaptor,
    descriptor: WorkspaceDescriptor,
) -> CompletionSubscriber<MockChannelAdaptor, WorkspaceStart> {
    CompletionSubscriber::subscribe(
        channel.clone(),
        None,
        WorkspaceStart::new(descriptor),
        SubscribeConfig::default(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn resolves_ide_url_once_running() {
    let channel = MockChannelAdaptor::new();
    let descriptor = descriptor(
        None,
        vec![
            link("self", "http://x/ws/1"),
            link("ide url", "http://ide.example/ws/1"),
        ],
    );
    let subscriber = observe(&channel, descriptor).await;
    channel
        .publish(event("STARTING", None, Value::Null))
        .await
        .unwrap();
    channel
        .publish(event("RUNNING", None, Value::Null))
        .await
        .unwrap();
    assert_eq!(subscriber.wait().await.unwrap(), "http://ide.example/ws/1");
    assert_eq!(channel.close_count(), 1);
}

#[tokio::test]
async fn error_event_rejects_with_its_payload() {
    let channel = MockChannelAdaptor::new();
    let subscriber = observe(&channel, descriptor(None, vec![])).await;
    channel
        .publish(event("ERROR", None, json!("boom")))
        .await
        .unwrap();
    match subscriber.wait().await {
        Err(SubscriberError::Rejected(StartFailure::Failed { payload })) => {
            assert_eq!(payload, json!("boom"));
        }
        other => panic!("expected a startup failure, got {:?}", other.map(|_| ())),
    }
    assert_eq!(channel.close_count(), 1);
}

#[tokio::test]
async fn missing_ide_url_link_rejects() {
    let channel = MockChannelAdaptor::new();
    let descriptor = descriptor(None, vec![link("self", "http://x/ws/1")]);
    let subscriber = observe(&channel, descriptor).await;
    channel
        .publish(event("RUNNING", None, Value::Null))
        .await
        .unwrap();
    match subscriber.wait().await {
        Err(SubscriberError::Rejected(StartFailure::LinkNotFound(rel))) => {
            assert_eq!(rel, IDE_URL_REL);
        }
        other => panic!("expected a missing link rejection, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn first_of_duplicated_links_wins() {
    let channel = MockChannelAdaptor::new();
    let descriptor = descriptor(
        None,
        vec![
            link("ide url", "http://ide.example/first"),
            link("ide url", "http://ide.example/second"),
        ],
    );
    let subscriber = observe(&channel, descriptor).await;
    channel
        .publish(event("RUNNING", None, Value::Null))
        .await
        .unwrap();
    assert_eq!(subscriber.wait().await.unwrap(), "http://ide.example/first");
}

#[tokio::test]
async fn running_followed_by_error_settles_on_running() {
    let channel = MockChannelAdaptor::new();
    let descriptor = descriptor(None, vec![link("ide url", "http://ide.example/ws/1")]);
    let subscriber = observe(&channel, descriptor).await;
    channel
        .publish(event("RUNNING", None, Value::Null))
        .await
        .unwrap();
    channel
        .publish(event("ERROR", None, json!("late")))
        .await
        .unwrap();
    assert_eq!(subscriber.wait().await.unwrap(), "http://ide.example/ws/1");
}

#[tokio::test]
async fn ignores_events_of_other_workspaces() {
    let workspace_id = uuid::Uuid::new_v4().to_string();
    let channel = MockChannelAdaptor::new();
    let descriptor = descriptor(
        Some(workspace_id.clone()),
        vec![link("ide url", "http://ide.example/ws")],
    );
    let wait = wait_for_start(channel.clone(), descriptor, SubscribeConfig::default());
    let publisher = async {
        channel
            .publish(event("RUNNING", Some("other"), Value::Null))
            .await
            .unwrap();
        channel
            .publish(event("RUNNING", Some(workspace_id.as_str()), Value::Null))
            .await
            .unwrap();
    };
    let (result, _) = futures::join!(wait, publisher);
    assert_eq!(result.unwrap(), "http://ide.example/ws");
}
