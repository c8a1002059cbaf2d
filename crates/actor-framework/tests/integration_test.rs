use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct SimpleUser {
    id: u32,
    name: String,
    is_admin: bool,
    logins: u32,
}

#[derive(Debug)]
struct SimpleUserCreate {
    name: String,
}

#[derive(Debug)]
enum UserAction {
    PromoteToAdmin,
    Rename(String),
    Login,
}

#[derive(Debug, thiserror::Error)]
enum SimpleUserError {
    #[error("name {0:?} is reserved")]
    ReservedName(String),
    #[error("{0}")]
    Communication(String),
}

impl From<String> for SimpleUserError {
    fn from(msg: String) -> Self {
        SimpleUserError::Communication(msg)
    }
}

/// Names the directory refuses to hand out.
struct Directory {
    reserved: HashSet<String>,
}

#[async_trait]
impl ActorEntity for SimpleUser {
    type Id = u32;
    type Create = SimpleUserCreate;
    type Action = UserAction;
    type ActionResult = bool;
    type IndexKey = &'static str;
    type Context = Arc<Directory>;
    type Error = SimpleUserError;

    async fn from_create_params(
        id: u32,
        params: SimpleUserCreate,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error> {
        if ctx.reserved.contains(&params.name) {
            return Err(SimpleUserError::ReservedName(params.name));
        }
        Ok(Self {
            id,
            name: params.name,
            is_admin: false,
            logins: 0,
        })
    }

    async fn handle_action(
        &mut self,
        action: UserAction,
        ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            UserAction::PromoteToAdmin => {
                if self.is_admin {
                    Ok(false)
                } else {
                    self.is_admin = true;
                    Ok(true)
                }
            }
            UserAction::Rename(new_name) => {
                if ctx.reserved.contains(&new_name) {
                    return Err(SimpleUserError::ReservedName(new_name));
                }
                self.name = new_name;
                Ok(true)
            }
            UserAction::Login => {
                self.logins += 1;
                Ok(true)
            }
        }
    }

    fn index_key(&self) -> Option<&'static str> {
        Some(if self.is_admin { "admin" } else { "member" })
    }
}

/// Typed wrapper, as a service crate would write one.
struct UserClient {
    inner: ResourceClient<SimpleUser>,
}

#[async_trait]
impl ActorClient<SimpleUser> for UserClient {
    type Error = SimpleUserError;

    fn inner(&self) -> &ResourceClient<SimpleUser> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SimpleUserError::Communication(e.to_string())
    }
}

fn start() -> ResourceClient<SimpleUser> {
    let counter = Arc::new(AtomicU32::new(1));
    let (actor, client) =
        ResourceActor::new(10, move || counter.fetch_add(1, Ordering::SeqCst));
    let directory = Arc::new(Directory {
        reserved: HashSet::from(["root".to_string()]),
    });
    tokio::spawn(actor.run(directory));
    client
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let client = start();

    // 1. Create
    let payload = SimpleUserCreate {
        name: "Alice".into(),
    };
    let id: u32 = client.create(payload).await.unwrap();
    assert_eq!(id, 1); // First ID should be 1
    assert_eq!(client.lookup("member").await.unwrap(), vec![id]);

    // 2. Perform Action: Promote
    let changed: bool = client
        .perform_action(id, UserAction::PromoteToAdmin)
        .await
        .unwrap();
    assert!(changed);

    // Verify state and index
    let user: SimpleUser = client.get(id).await.unwrap().unwrap();
    assert!(user.is_admin);
    assert!(client.lookup("member").await.unwrap().is_empty());
    assert_eq!(client.lookup("admin").await.unwrap(), vec![id]);

    // 3. Perform Action: Promote again (should return false)
    let changed_again: bool = client
        .perform_action(id, UserAction::PromoteToAdmin)
        .await
        .unwrap();
    assert!(!changed_again);

    // 4. Rename through the action path
    client
        .perform_action(id, UserAction::Rename("Bob".into()))
        .await
        .unwrap();
    let renamed = client.get(id).await.unwrap().unwrap();
    assert_eq!(renamed.name, "Bob");

    // 5. Unknown IDs read as absent
    assert!(client.get(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_context_rejections_are_not_committed() {
    let client = start();

    let rejected = client
        .create(SimpleUserCreate {
            name: "root".into(),
        })
        .await;
    match rejected {
        Err(FrameworkError::EntityError(inner)) => {
            let err = inner.downcast::<SimpleUserError>().unwrap();
            assert!(matches!(*err, SimpleUserError::ReservedName(ref n) if n == "root"));
        }
        other => panic!("expected entity error, got {other:?}"),
    }

    let id = client
        .create(SimpleUserCreate {
            name: "carol".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 2); // the rejected create still consumed an ID

    let result = client
        .perform_action(id, UserAction::Rename("root".into()))
        .await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert_eq!(client.get(id).await.unwrap().unwrap().name, "carol");
}

#[tokio::test]
async fn test_concurrent_actions_are_serialized() {
    let client = start();
    let id = client
        .create(SimpleUserCreate {
            name: "dave".into(),
        })
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let c = client.clone();
        handles.push(tokio::spawn(async move {
            c.perform_action(id, UserAction::Login).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().unwrap());
    }

    let user = client.get(id).await.unwrap().unwrap();
    assert_eq!(user.logins, 50);
}

#[tokio::test]
async fn test_actor_client_default_methods() {
    let inner = start();
    let id = inner
        .create(SimpleUserCreate {
            name: "erin".into(),
        })
        .await
        .unwrap();

    let users = UserClient { inner };
    let fetched = ActorClient::get(&users, id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "erin");
    assert_eq!(users.lookup("member").await.unwrap(), vec![id]);
    assert!(users.lookup("admin").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_closed_actor_reports_communication_error() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(1, || 1);
    drop(actor);

    let result = client
        .create(SimpleUserCreate {
            name: "frank".into(),
        })
        .await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
