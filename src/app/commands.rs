use crate::app::cli::{cli_help_lines, parse_cli_verb, CliVerb};
use crate::app::state_paths::{bootstrap_state_root, default_state_root_path, StatePaths};
use crate::catalog::{self, CatalogError};
use crate::editor::navigation::parse_scripted_edit_keys;
use crate::form::{EditDraft, ProfileUpdate};
use crate::profile::{render, store, ProfileError, ProfileRole, UserRecord};
use crate::shared::logging::append_profile_log_line;
use crate::tui::editor::{run_editor_scripted, run_editor_tui, EditExit};
use std::io::{self, IsTerminal};

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    let Some(verb) = args.first() else {
        return Err(cli_help_lines().join("\n"));
    };
    match parse_cli_verb(verb) {
        CliVerb::Profile => cmd_profile(),
        CliVerb::EditProfile => cmd_edit_profile(),
        CliVerb::Cuisines => cmd_cuisines(),
        CliVerb::Unknown => Err(format!(
            "unknown command `{verb}`\n{}",
            cli_help_lines().join("\n")
        )),
    }
}

fn ensure_state_root() -> Result<StatePaths, String> {
    let root = default_state_root_path().map_err(map_profile_err)?;
    let paths = StatePaths::new(root);
    bootstrap_state_root(&paths).map_err(map_profile_err)?;
    Ok(paths)
}

fn map_profile_err(err: ProfileError) -> String {
    err.to_string()
}

fn map_catalog_err(err: CatalogError) -> String {
    err.to_string()
}

fn is_interactive_edit() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

fn load_scripted_edit_keys() -> Result<Option<Vec<crossterm::event::KeyEvent>>, String> {
    let Ok(raw) = std::env::var("PLATEMATE_EDIT_SCRIPT_KEYS") else {
        return Ok(None);
    };
    parse_scripted_edit_keys(&raw).map(Some)
}

fn cmd_profile() -> Result<String, String> {
    let paths = ensure_state_root()?;
    let record = store::load_record(&paths).map_err(map_profile_err)?;
    let catalog = catalog::load_or_seed(&paths.catalog_file()).map_err(map_catalog_err)?;
    Ok(render::profile_page(&record, &catalog).join("\n"))
}

fn cmd_cuisines() -> Result<String, String> {
    let paths = ensure_state_root()?;
    let catalog = catalog::load_or_seed(&paths.catalog_file()).map_err(map_catalog_err)?;
    Ok(catalog
        .options()
        .iter()
        .map(|option| format!("{}  {}", option.id, option.name))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn cmd_edit_profile() -> Result<String, String> {
    let paths = ensure_state_root()?;
    let record = store::load_record_or_default(&paths).map_err(map_profile_err)?;
    let catalog = catalog::load_or_seed(&paths.catalog_file()).map_err(map_catalog_err)?;
    let mut draft = EditDraft::from_record(record);

    let exit = if let Some(scripted_keys) = load_scripted_edit_keys()? {
        run_editor_scripted(&mut draft, &catalog, scripted_keys)?
    } else if is_interactive_edit() {
        run_editor_tui(&mut draft, &catalog)?
    } else {
        // headless, unscripted: submit the seeded draft as-is
        draft
            .submit()
            .map(EditExit::Save)
            .map_err(|errors| format!("cannot save profile: {errors}"))?
    };

    match exit {
        EditExit::Cancel => Ok("edit canceled".to_string()),
        EditExit::Save(update) => apply_and_close(&paths, draft, &update),
    }
}

fn apply_and_close(
    paths: &StatePaths,
    draft: EditDraft,
    update: &ProfileUpdate,
) -> Result<String, String> {
    let mut record = draft.into_record();
    store::apply_update(&mut record, update);
    let path = store::save_record(paths, &record).map_err(map_profile_err)?;
    let _ = append_profile_log_line(&paths.root, &update_log_line(&record, update));
    Ok(update_summary(&path.display().to_string(), &record, update))
}

fn update_log_line(record: &UserRecord, update: &ProfileUpdate) -> String {
    format!(
        "profile_update role={} cuisines={} image={}",
        record.role().as_str(),
        record.cuisines.len(),
        if update.profile_image.is_some() {
            "updated"
        } else {
            "unchanged"
        }
    )
}

fn update_summary(path: &str, record: &UserRecord, update: &ProfileUpdate) -> String {
    let cuisine_line = match record.role() {
        ProfileRole::Member => format!("cuisines={}", record.cuisines.len()),
        ProfileRole::Chef => format!(
            "chef_cuisine={}",
            record
                .chef_cuisine
                .as_ref()
                .map(|name| name.as_str().to_string())
                .unwrap_or_else(|| "none".to_string())
        ),
    };
    format!(
        "profile updated\nrecord={}\nrole={}\nname={}\naddress={}\n{}\nimage={}",
        path,
        record.role().as_str(),
        record.name,
        record.address,
        cuisine_line,
        if update.profile_image.is_some() {
            "updated"
        } else {
            "unchanged"
        }
    )
}
