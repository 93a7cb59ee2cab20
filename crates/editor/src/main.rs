//! sceneprops - describe or edit a scene object stored as JSON.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sceneprops_domain::SceneObject;
use sceneprops_editor::config::DEFAULT_LOG_FILTER;
use sceneprops_editor::{EditorConfig, PropertyBinding, PropertyEdit, PropertyEditor};

const USAGE: &str = "Usage: sceneprops <command> <scene.json> <input.json>

Commands:
  describe   print descriptors for the bindings in <input.json>
  apply      apply the edits in <input.json> and print the updated scene";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EditorConfig::from_env()?;
    let editor = PropertyEditor::from_config(&config);
    tracing::debug!(
        policy = ?config.unknown_token_policy,
        kinds = ?editor.registry().list_kinds(),
        "Loaded configuration"
    );

    let mut args = std::env::args().skip(1);
    let command = args.next();
    let (Some(scene_path), Some(input_path)) = (args.next(), args.next()) else {
        anyhow::bail!(USAGE);
    };

    match command.as_deref() {
        Some("describe") => {
            let scene: SceneObject = read_json(&scene_path)?;
            let bindings: Vec<PropertyBinding> = read_json(&input_path)?;
            let described = editor.describe_all(&scene, &bindings)?;
            print_json(&described, config.pretty_output)
        }
        Some("apply") => {
            let mut scene: SceneObject = read_json(&scene_path)?;
            let edits: Vec<PropertyEdit> = read_json(&input_path)?;
            editor.apply_edits(&mut scene, &edits)?;
            print_json(&scene, config.pretty_output)
        }
        Some(cmd) => anyhow::bail!("Unknown command: {cmd}\n\n{USAGE}"),
        None => anyhow::bail!(USAGE),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
