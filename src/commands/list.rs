//! Listing of the configured repository set.

use crate::core::{
    colors::{style, Color},
    error::{RepoStatError, Result},
    layout::pad,
    RepoConfig, StatusContext,
};

pub fn execute_list() -> Result<()> {
    let config = RepoConfig::load_or_create()?;
    let home_path = dirs::home_dir().ok_or(RepoStatError::HomeDirNotFound)?;

    if config.repositories.is_empty() {
        println!("No repositories configured");
        return Ok(());
    }

    let ctx = StatusContext::new(home_path, &config.repositories, |path| {
        config.tags_for(path)
    });
    let widths = ctx.column_widths();

    for repo in &ctx.repositories {
        let tags = repo
            .tags
            .iter()
            .map(|tag| format!("@{tag}"))
            .collect::<Vec<_>>()
            .join(" ");

        println!(
            "{}{}{} {}",
            style(&repo.display_dir, Color::Gray),
            style(&repo.name, Color::White),
            pad(&repo.display_path(), widths.path),
            tags,
        );
    }

    Ok(())
}
