use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use skillmeter::{SkillCatalog, SkillDraft};

use crate::ui::json::emit;

use super::{GlobalArgs, Session};

/// TOML layout of a catalog, ready to paste into `skillmeter.toml`.
#[derive(Debug, Serialize)]
struct CatalogFile {
    technologies: Vec<String>,
    skills: Vec<SkillDraft>,
}

impl From<&SkillCatalog> for CatalogFile {
    fn from(catalog: &SkillCatalog) -> Self {
        Self {
            technologies: catalog.technologies().to_vec(),
            skills: catalog.skills().iter().map(SkillDraft::from).collect(),
        }
    }
}

pub fn cmd_catalog(args: &GlobalArgs) -> Result<ExitCode> {
    let session = Session::load(args)?;
    let catalog = session.config.catalog()?;

    if session.ui.json {
        emit(&serde_json::json!({ "event": "catalog", "catalog": catalog }))?;
        return Ok(ExitCode::SUCCESS);
    }

    print!("{}", render_toml(&catalog)?);
    Ok(ExitCode::SUCCESS)
}

fn render_toml(catalog: &SkillCatalog) -> Result<String> {
    Ok(toml::to_string(&CatalogFile::from(catalog))?)
}
