use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use ripecheck::{
    CameraCapture, ClassificationWorkflow, Config, GalleryPicker, RemoteClassifier, StateUpdate,
    Status, WorkflowEvent,
};

#[tokio::main]
async fn main() {
    env_logger::init();
    log::info!("ripecheck starting");

    let config = Config::load();
    log::info!("Prediction endpoint: {}", config.endpoint);

    let gallery = Arc::new(GalleryPicker::new(
        config.gallery.command.clone(),
        config.gallery.args.clone(),
    ));
    let camera = Arc::new(CameraCapture::new(
        config.camera.command.clone(),
        config.camera.args.clone(),
        config.camera.device.clone(),
    ));
    let service = Arc::new(RemoteClassifier::new(config.endpoint.clone()));

    let (event_tx, event_rx) = async_channel::unbounded::<WorkflowEvent>();
    let (update_tx, update_rx) = async_channel::unbounded::<StateUpdate>();

    let workflow = ClassificationWorkflow::new(gallery, camera, service, event_tx.clone(), update_tx);
    tokio::spawn(workflow.run(event_rx));

    // Render state updates as they arrive.
    tokio::spawn(async move {
        while let Ok(update) = update_rx.recv().await {
            render(&update);
        }
    });

    println!("Madurez de Plátanos");
    println!("Comandos: g = galería, c = cámara, p = predecir, q = salir");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match line.trim() {
            "g" | "galeria" | "gallery" => {
                let _ = event_tx.send(WorkflowEvent::SelectFromGallery).await;
            }
            "c" | "camara" | "camera" => {
                let _ = event_tx.send(WorkflowEvent::CaptureFromCamera).await;
            }
            "p" | "predecir" | "predict" => {
                let _ = event_tx.send(WorkflowEvent::Predict).await;
            }
            "q" | "quit" => break,
            "" => {}
            other => println!("Comando desconocido: {other}"),
        }
    }

    log::info!("ripecheck exiting");
}

fn render(update: &StateUpdate) {
    match update {
        StateUpdate::Notice(message) => println!("! {message}"),
        StateUpdate::Changed(state) => match state.status {
            Status::Idle => {}
            Status::ImageSelected => {
                if let Some(image) = &state.image {
                    println!("Imagen: {}", image.path().display());
                }
            }
            Status::Predicting => println!("Prediciendo..."),
            Status::Result => {
                if let Some(prediction) = &state.result {
                    println!("Resultado: {}", prediction.display());
                }
            }
            Status::Failed => {
                if let Some(error) = &state.error {
                    println!("Error: {error}");
                }
            }
        },
    }
}
