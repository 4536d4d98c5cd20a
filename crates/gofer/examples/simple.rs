use std::fs;
use std::process::ExitCode;

use gofer::{AgentConfig, DataStore, Error, TaskAgent, TaskKind};

#[tokio::main]
async fn main() -> Result<ExitCode, Error> {
    let scratch = tempfile::TempDir::new()?;
    let config = AgentConfig::resolve(Some(scratch.path().to_path_buf()))?;
    let agent = TaskAgent::new(DataStore::open(&config)?);
    let store = agent.store();

    fs::write(store.path("email.txt"), "maria@example.com\nSubject: hello\n")?;
    fs::write(store.path("dates.txt"), "2024-01-03\n2024-01-04\n2024-01-10\n")?;
    fs::write(
        store.path("contacts.json"),
        r#"[{"name":"Zoe"},{"name":"Amy"}]"#,
    )?;
    fs::write(store.path("format.md"), "# Notes\nFirst line\n")?;
    fs::create_dir(store.path("logs"))?;
    fs::write(store.path("logs").join("2024-01-10.log"), "started\nready\n")?;

    for kind in [
        TaskKind::ExtractSenderEmail,
        TaskKind::CountWednesdays,
        TaskKind::SortContacts,
        TaskKind::ExtractLogs,
        TaskKind::ConvertMarkdownToHtml,
        TaskKind::TranscribeAudio,
    ] {
        let report = agent.run(kind).await?;
        println!("{}: {}", kind.name(), serde_json::to_string(&report)?);
    }

    let report = agent.dispatch("make me a sandwich").await?;
    println!("unknown task: {}", serde_json::to_string(&report)?);

    Ok(ExitCode::SUCCESS)
}
