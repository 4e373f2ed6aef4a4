use std::sync::Arc;

use tokio::spawn;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, warn};

use crate::models::Expense;
use crate::store::ExpenseStore;
use crate::view::{DraftInput, ExpenseView, FilterInput};

enum ViewCommand {
    Edit(DraftInput),
    Filter(FilterInput),
    Submit(oneshot::Sender<bool>),
    Read(oneshot::Sender<ExpenseView>)
}

/// Handle to the single task that owns the view state.
///
/// The task is fed by two sources: the store subscription (snapshot
/// deliveries) and this handle's command channel. Dropping the handle
/// closes the channel, which ends the task and tears the subscription
/// down with it.
pub struct ViewActor {
    sender: mpsc::UnboundedSender<ViewCommand>,
    handle: JoinHandle<()>
}

impl ViewActor {
    pub fn new<S: ExpenseStore>(store: Arc<S>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let snapshots = store.subscribe();

        let worker = ViewWorker {
            store,
            view: ExpenseView::new(),
            snapshots,
            receiver,
            subscribed: true
        };

        Self {
            sender,
            handle: spawn(worker.run())
        }
    }

    /// Queues a draft-field edit. Returns false if the task is gone.
    pub fn edit(&self, input: DraftInput) -> bool {
        self.sender.send(ViewCommand::Edit(input)).is_ok()
    }

    /// Queues a filter change. Returns false if the task is gone.
    pub fn set_filter(&self, input: FilterInput) -> bool {
        self.sender.send(ViewCommand::Filter(input)).is_ok()
    }

    /// Submits the current draft and waits for the write attempt to finish.
    /// Resolves to whether the gate accepted the draft; a failed write is
    /// logged by the task and still counts as an accepted submission.
    pub async fn submit(&self) -> Option<bool> {
        let (ack, done) = oneshot::channel();

        if self.sender.send(ViewCommand::Submit(ack)).is_err() {
            return None;
        }

        done.await.ok()
    }

    /// Reads a consistent copy of the view state, current with the latest
    /// delivered snapshot.
    pub async fn read(&self) -> Option<ExpenseView> {
        let (reply, state) = oneshot::channel();

        if self.sender.send(ViewCommand::Read(reply)).is_err() {
            return None;
        }

        state.await.ok()
    }

    /// Closes the command channel and waits for the task to finish.
    pub async fn despawn(self) -> Result<(), JoinError> {
        drop(self.sender);
        self.handle.await
    }
}

struct ViewWorker<S: ExpenseStore> {
    store: Arc<S>,
    view: ExpenseView,
    snapshots: watch::Receiver<Vec<Expense>>,
    receiver: mpsc::UnboundedReceiver<ViewCommand>,
    subscribed: bool
}

impl<S: ExpenseStore> ViewWorker<S> {
    async fn run(mut self) {
        self.refresh();

        loop {
            tokio::select! {
                changed = self.snapshots.changed(), if self.subscribed => {
                    match changed {
                        Ok(()) => self.refresh(),
                        // The store side of the subscription is gone; keep
                        // serving commands over the last delivered snapshot.
                        Err(_) => self.subscribed = false
                    }
                }
                command = self.receiver.recv() => {
                    match command {
                        Some(command) => self.handle(command),
                        None => break
                    }
                }
            }
        }
    }

    fn refresh(&mut self) {
        let snapshot = self.snapshots.borrow_and_update().clone();
        self.view.apply_snapshot(snapshot);
    }

    fn handle(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::Edit(input) => self.view.edit(input),
            ViewCommand::Filter(input) => self.view.set_filter(input),
            ViewCommand::Submit(ack) => self.submit(ack),
            ViewCommand::Read(reply) => {
                // Drain any snapshot that landed before this read so a
                // caller who awaited a submit sees its own write.
                if self.subscribed && self.snapshots.has_changed().unwrap_or(false) {
                    self.refresh();
                }

                let _ = reply.send(self.view.clone());
            }
        }
    }

    fn submit(&mut self, ack: oneshot::Sender<bool>) {
        let Some(expense) = self.view.take_submission() else {
            let _ = ack.send(false);
            return;
        };

        // The write runs detached so snapshot delivery is never blocked;
        // the caller's ack resolves once the attempt finishes.
        let store = self.store.clone();

        spawn(async move {
            match store.append(expense).await {
                Ok(id) => debug!("Expense [{id}] saved"),
                Err(error) => warn!("Expense write failed: {error}")
            }

            let _ = ack.send(true);
        });
    }
}
