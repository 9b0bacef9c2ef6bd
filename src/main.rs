use docsight::models::FileUpload;
use docsight::{Config, DocumentProcessor};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docsight=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let mut args = std::env::args().skip(1);
    let file_path = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: docsight <file> [content-type]"))?;
    let content_type = match args.next() {
        Some(ct) => ct,
        None => mime_guess::from_path(&file_path)
            .first_or_octet_stream()
            .to_string(),
    };

    let metadata = tokio::fs::metadata(&file_path).await?;
    let filename = std::path::Path::new(&file_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.clone());

    let upload = FileUpload {
        filename,
        content_type,
        file_size: metadata.len() as i64,
        file_path: file_path.clone(),
    };
    info!(file = %file_path, content_type = %upload.content_type, "Analyzing document");

    let processor = DocumentProcessor::new(config)?;
    let analysis = processor.process_file(&upload).await;

    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}
