use crate::{ChannelObserver, ConvertCommand, ConvertUpdate};
use pdf_images::{ConversionOptions, ImageRef, Selection};
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Both ends of the UI side of the worker channels
pub struct WorkerHandle {
    command_tx: mpsc::UnboundedSender<ConvertCommand>,
    update_rx: mpsc::UnboundedReceiver<ConvertUpdate>,
}

impl WorkerHandle {
    /// Queue a command. Returns false if the worker has stopped.
    pub fn send(&self, cmd: ConvertCommand) -> bool {
        self.command_tx.send(cmd).is_ok()
    }

    /// Next pending update, without waiting
    pub fn try_recv(&mut self) -> Option<ConvertUpdate> {
        self.update_rx.try_recv().ok()
    }

    pub async fn recv(&mut self) -> Option<ConvertUpdate> {
        self.update_rx.recv().await
    }
}

/// Start the background worker on the given runtime
pub fn spawn_worker(runtime: &tokio::runtime::Handle) -> WorkerHandle {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();

    runtime.spawn(worker_task(command_rx, update_tx));

    WorkerHandle {
        command_tx,
        update_rx,
    }
}

/// Async worker task that processes commands one at a time and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<ConvertCommand>,
    update_tx: mpsc::UnboundedSender<ConvertUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut command_rx, &update_tx).await;
    }
    log::debug!("Command channel closed, worker exiting");
}

async fn process_command(
    cmd: ConvertCommand,
    command_rx: &mut mpsc::UnboundedReceiver<ConvertCommand>,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    match cmd {
        ConvertCommand::ValidateImages { paths } => {
            handle_validate(paths, update_tx).await;
        }
        ConvertCommand::Convert { images, options } => {
            handle_convert(images, options, update_tx).await;
        }
        ConvertCommand::GeneratePreview { mut path } => {
            // Only the most recent preview request matters
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let ConvertCommand::GeneratePreview { path: newer } = next_cmd {
                    log::debug!("Discarding queued preview, using newer request");
                    path = newer;
                } else {
                    Box::pin(process_command(next_cmd, command_rx, update_tx)).await;
                }
            }

            handle_preview(path, update_tx).await;
        }
    }
}

async fn handle_validate(paths: Vec<PathBuf>, update_tx: &mpsc::UnboundedSender<ConvertUpdate>) {
    let result = tokio::task::spawn_blocking(move || {
        let mut selection = Selection::new();
        let outcome = selection.add_files(paths);
        (selection.images().to_vec(), outcome.rejected)
    })
    .await;

    let update = match result {
        Ok((added, rejected)) => ConvertUpdate::ImagesValidated { added, rejected },
        Err(e) => ConvertUpdate::ValidationFailed {
            message: format!("Image validation failed: {}", e),
        },
    };
    let _ = update_tx.send(update);
}

async fn handle_convert(
    images: Vec<ImageRef>,
    options: ConversionOptions,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    let selection: Selection = images.into_iter().collect();
    let observer = ChannelObserver::new(update_tx.clone());

    // Progress, skips and completion are reported by the observer
    if let Err(e) = pdf_images::convert(&selection, &options, observer).await {
        log::error!("Conversion failed: {}", e);
        let _ = update_tx.send(ConvertUpdate::ConversionFailed {
            message: e.to_string(),
        });
    }
}

async fn handle_preview(path: PathBuf, update_tx: &mpsc::UnboundedSender<ConvertUpdate>) {
    let update = match pdf_images::generate_default_preview(&path).await {
        Ok(preview) => ConvertUpdate::PreviewReady { preview },
        Err(e) => {
            log::warn!("Preview failed for {}: {}", path.display(), e);
            ConvertUpdate::PreviewFailed {
                message: format!("Could not preview {}: {}", path.display(), e),
            }
        }
    };
    let _ = update_tx.send(update);
}
