use docket_core::domain::{DocketError, TaskStatus, TaskUpdate};
use docket_core::service::TaskService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // RUST_LOG controls verbosity (e.g. RUST_LOG=docket_core=info).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // (A) One service with one in-memory store for the life of the process.
    let service = TaskService::new();

    // (B) Create a couple of tasks.
    let milk = service
        .create("Buy milk", "2% milk, 1 gallon")
        .await
        .expect("valid input");
    let taxes = service
        .create("File taxes", "Federal and state returns")
        .await
        .expect("valid input");
    println!("created: {} (id={})", milk.name, milk.id);
    println!("created: {} (id={})", taxes.name, taxes.id);

    // (C) List everything, then move one task along with a sparse update.
    println!("tracked tasks:");
    for task in service.list().await {
        println!("  [{}] {}: {}", task.status, task.name, task.description);
    }

    let milk = service
        .update(
            milk.id,
            TaskUpdate {
                status: Some(TaskStatus::InProgress),
                ..TaskUpdate::default()
            },
        )
        .await
        .expect("task exists");
    println!(
        "updated: {} is now {} (name/description untouched)",
        milk.name, milk.status
    );

    // (D) An explicitly empty value is invalid input, not "no change".
    match service
        .update(
            milk.id,
            TaskUpdate {
                name: Some(String::new()),
                ..TaskUpdate::default()
            },
        )
        .await
    {
        Err(DocketError::Validation { field, constraint }) => {
            println!("rejected update: {field} {constraint}");
        }
        other => println!("unexpected result: {other:?}"),
    }

    // (E) Finish the task, delete it, and show that the id is gone for good.
    service
        .update(
            milk.id,
            TaskUpdate {
                status: Some(TaskStatus::Done),
                ..TaskUpdate::default()
            },
        )
        .await
        .expect("task exists");
    service.delete(milk.id).await.expect("task exists");

    match service.get(milk.id).await {
        Err(DocketError::NotFound(id)) => println!("get after delete: no task with id={id}"),
        other => println!("unexpected result: {other:?}"),
    }

    println!("still tracked: {} task(s)", service.list().await.len());
}
