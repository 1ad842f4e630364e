use std::collections::HashMap;
use tokio::task::JoinHandle;

/// Keyed background tasks; spawning under a taken key aborts the old task.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn(&mut self, key: &str, task: JoinHandle<()>) {
        if let Some(handle) = self.tasks.insert(key.to_string(), task) {
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn respawning_a_key_aborts_the_previous_task() {
        let mut tasks = TaskManager::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        tasks.spawn(
            "catalog",
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_secs(60)).await;
                let _ = tx.send(());
            }),
        );
        tasks.spawn("catalog", tokio::spawn(async {}));

        // the aborted task drops its sender without sending
        assert!(rx.await.is_err());
    }

    #[tokio::test]
    async fn abort_all_stops_every_task() {
        let mut tasks = TaskManager::new();
        let mut receivers = Vec::new();
        for key in ["catalog", "track"] {
            let (tx, rx) = tokio::sync::oneshot::channel::<()>();
            tasks.spawn(
                key,
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    let _ = tx.send(());
                }),
            );
            receivers.push(rx);
        }

        tasks.abort_all();
        for rx in receivers {
            assert!(rx.await.is_err());
        }
    }
}
