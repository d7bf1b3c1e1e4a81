use anyhow::{Context, Result, bail};
use editable_areas_config::Config;
use editable_areas_engine::{
    Area, AreaHandler, AreaInfo, AreaOptions, Editable, EditableKind, EditableLoader,
    EditableServices, FrontendOutcome, NamingStrategy, NestedNamingStrategy, RenderContext, io,
};
use std::{env, path::Path, process, sync::Arc};

const USAGE: &str = "\
Usage:
  editable-areas name <name> <kind> <index> [ancestor...]
  editable-areas lookup <document.json> <area> <child> [kind]
  editable-areas render <document.json> <area> <type> [--editmode]";

/// Writes one outline line per rendered area, indented by nesting depth.
struct OutlineHandler;

impl AreaHandler for OutlineHandler {
    fn render_area_frontend(
        &self,
        info: Option<&AreaInfo<'_>>,
        ctx: &mut RenderContext,
    ) -> Result<()> {
        let indent = "  ".repeat(ctx.block_state().depth().saturating_sub(1));
        let line = match info {
            Some(info) => format!(
                "{indent}{} [{}] params={}\n",
                info.editable().name(),
                info.id(),
                serde_json::Value::Object(info.params().clone())
            ),
            None => format!("{indent}(area without info)\n"),
        };
        ctx.write(&line);
        Ok(())
    }
}

fn services(config: &Config) -> EditableServices {
    EditableServices {
        capability: Arc::new(config.area_capability()),
        handler: Arc::new(OutlineHandler),
        naming: Arc::new(NestedNamingStrategy::new()),
    }
}

/// Find `child` of `kind` below the top-level area named `area`.
fn lookup(
    config: &Config,
    document: &Path,
    area: &str,
    child: &str,
    kind: EditableKind,
) -> Result<Editable> {
    let path = config.resolve_document_path(document);
    let document = Arc::new(io::read_document(&path)?);
    let area = Area::new(area, AreaOptions::default(), services(config), document);

    match area.get_element_of_kind(child, kind) {
        Some(editable) => Ok(editable),
        None => bail!(
            "No element '{child}' of kind {kind} below area '{}'",
            area.name()
        ),
    }
}

fn run(args: &[String], config: &Config) -> Result<()> {
    match args {
        [command, name, kind, index, ancestors @ ..] if command == "name" => {
            let index: u32 = index
                .parse()
                .with_context(|| format!("invalid index: {index}"))?;
            let id = NestedNamingStrategy::new().build_child_element_name(
                name,
                kind,
                ancestors,
                index,
            );
            println!("{id}");
        }
        [command, document, area, child, rest @ ..] if command == "lookup" => {
            let kind = match rest {
                [] => EditableKind::Area,
                [kind] => EditableLoader::new().resolve(kind)?,
                _ => bail!("{USAGE}"),
            };
            let editable = lookup(config, Path::new(document), area, child, kind)?;
            println!(
                "{} ({}) under {:?}: {}",
                editable.name(),
                editable.kind(),
                editable.parent_block_names(),
                editable.data()
            );
        }
        [command, document, area, kind, flags @ ..] if command == "render" => {
            let edit_mode = match flags {
                [] => config.edit_mode,
                [flag] if flag == "--editmode" => true,
                _ => bail!("{USAGE}"),
            };
            let path = config.resolve_document_path(Path::new(document));
            let document = Arc::new(io::read_document(&path)?);
            let area = Area::new(
                area.as_str(),
                AreaOptions::new(kind.as_str()),
                services(config),
                document,
            );

            let mut ctx = if edit_mode {
                RenderContext::edit_mode()
            } else {
                RenderContext::new()
            };
            let outcome = area.render(&mut ctx)?;
            if outcome == FrontendOutcome::Disabled {
                log::info!("Area type '{kind}' is disabled");
            }
            print!("{}", ctx.into_output());
        }
        _ => bail!("{USAGE}"),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::debug!("No config file at {}", Config::config_path().display());
            Config::default()
        }
        Err(e) => {
            eprintln!("Error loading config: {e}");
            process::exit(1);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args, &config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_document(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("page.json");
        std::fs::write(
            &path,
            r#"{ "editables": [ { "name": "outer.gallery:1#area", "type": "area" } ] }"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_lookup_finds_child() {
        let dir = TempDir::new().unwrap();
        let path = write_document(&dir);

        let editable = lookup(&Config::default(), &path, "outer", "gallery", EditableKind::Area)
            .unwrap();

        assert_eq!(editable.name(), "outer.gallery:1#area");
        assert_eq!(editable.parent_block_names(), ["outer".to_string()]);
    }

    #[test]
    fn test_lookup_missing_child_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_document(&dir);

        let err = lookup(&Config::default(), &path, "outer", "video", EditableKind::Area)
            .unwrap_err();

        assert!(err.to_string().contains("No element 'video'"));
    }

    #[test]
    fn test_run_reports_missing_child_as_error() {
        let dir = TempDir::new().unwrap();
        let path = write_document(&dir);
        let args: Vec<String> = ["lookup", path.to_str().unwrap(), "outer", "video"]
            .into_iter()
            .map(String::from)
            .collect();

        assert!(run(&args, &Config::default()).is_err());
    }

    #[test]
    fn test_lookup_resolves_relative_path_against_documents_path() {
        let dir = TempDir::new().unwrap();
        write_document(&dir);
        let config = Config {
            documents_path: Some(dir.path().to_path_buf()),
            ..Config::default()
        };

        let result = lookup(
            &config,
            Path::new("page.json"),
            "outer",
            "gallery",
            EditableKind::Area,
        );
        assert!(result.is_ok());
    }
}
