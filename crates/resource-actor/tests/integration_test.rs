use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    title: String,
    points: u32,
}

#[derive(Debug)]
struct TicketCreate {
    title: String,
    points: u32,
}

#[derive(Debug, Default)]
struct TicketUpdate {
    title: Option<String>,
    points: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
enum TicketError {
    #[error("title must not be empty")]
    EmptyTitle,
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Context = ();
    type Error = TicketError;
    const KIND: &'static str = "Ticket";

    fn id(&self) -> u32 {
        self.id
    }

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            title: params.title,
            points: params.points,
        })
    }

    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if self.title.is_empty() {
            return Err(TicketError::EmptyTitle);
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: TicketUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        // Merge points first so a rejected title proves the stored record is untouched.
        if let Some(points) = update.points {
            self.points = points;
        }
        if let Some(title) = update.title {
            if title.is_empty() {
                return Err(TicketError::EmptyTitle);
            }
            self.title = title;
        }
        Ok(())
    }
}

fn create(title: &str, points: u32) -> TicketCreate {
    TicketCreate {
        title: title.to_string(),
        points,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_full_lifecycle() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let ticket = client.create(create("Fix login", 3)).await.unwrap();
    assert_eq!(ticket.id, 0);

    // 2. Get returns what create returned
    let fetched = client.get(ticket.id).await.unwrap().unwrap();
    assert_eq!(fetched, ticket);

    // 3. Partial update only touches the given field
    let update = TicketUpdate {
        points: Some(5),
        ..Default::default()
    };
    let updated = client.update(ticket.id, update).await.unwrap();
    assert_eq!(updated.points, 5);
    assert_eq!(updated.title, "Fix login");

    // 4. Delete, then Get sees nothing
    client.delete(ticket.id).await.unwrap();
    assert!(client.get(ticket.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_ids_increase_and_are_not_reused_after_delete() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let ids: Vec<u32> = {
        let mut ids = Vec::new();
        for title in ["a", "b", "c"] {
            ids.push(client.create(create(title, 1)).await.unwrap().id);
        }
        ids
    };
    assert_eq!(ids, vec![0, 1, 2]);

    client.delete(0).await.unwrap();
    let next = client.create(create("d", 1)).await.unwrap();
    assert_eq!(next.id, 3);

    let titles: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["b", "c", "d"]);
}

#[tokio::test]
async fn test_failed_create_does_not_consume_id() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(create("", 1)).await.unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));
    assert!(client.list().await.unwrap().is_empty());

    let ticket = client.create(create("first", 1)).await.unwrap();
    assert_eq!(ticket.id, 0);
}

#[tokio::test]
async fn test_failed_update_leaves_record_untouched() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let ticket = client.create(create("stable", 2)).await.unwrap();
    let update = TicketUpdate {
        title: Some(String::new()),
        points: Some(99),
    };
    assert!(client.update(ticket.id, update).await.is_err());

    let stored = client.get(ticket.id).await.unwrap().unwrap();
    assert_eq!(stored, ticket);
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.delete(7).await.unwrap_err();
    assert_eq!(err.to_string(), "Ticket with ID=7 does not exist.");

    let err = client.update(7, TicketUpdate::default()).await.unwrap_err();
    assert!(err.is_not_found());

    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_seed_positions_allocator_after_max_id() {
    let (mut actor, client) = ResourceActor::<Ticket>::new(10);
    actor.seed([
        Ticket {
            id: 4,
            title: "seeded".into(),
            points: 0,
        },
        Ticket {
            id: 1,
            title: "older".into(),
            points: 0,
        },
    ]);
    assert_eq!(actor.len(), 2);
    tokio::spawn(actor.run(()));

    let ticket = client.create(create("new", 1)).await.unwrap();
    assert_eq!(ticket.id, 5);

    let ids: Vec<u32> = client.list().await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 4, 5]);
}

#[tokio::test]
async fn test_create_after_last_id_is_rejected_without_wrapping() {
    let (mut actor, client) = ResourceActor::<Ticket>::new(10);
    actor.seed([Ticket {
        id: u32::MAX - 1,
        title: "second to last".into(),
        points: 0,
    }]);
    tokio::spawn(actor.run(()));

    let last = client.create(create("last", 1)).await.unwrap();
    assert_eq!(last.id, u32::MAX);

    let err = client.create(create("one too many", 1)).await.unwrap_err();
    assert!(matches!(err, FrameworkError::IdsExhausted { kind: "Ticket" }));
    assert_eq!(err.to_string(), "No Ticket ids left to allocate");

    // Id 0 was never handed out, and the live records are untouched.
    assert!(client.get(0).await.unwrap().is_none());
    let ids: Vec<u32> = client.list().await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![u32::MAX - 1, u32::MAX]);
}
