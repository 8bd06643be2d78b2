//! Init command - Turn the template checkout into a new project.

use std::io;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use pastry_template::{
    Placeholders, Project, SubstitutionSet, TEMPLATE_AUTHOR, TEMPLATE_DESCRIPTION,
    TEMPLATE_GITHUB_USER, TEMPLATE_NAME,
};

use crate::prompt::{ClackPrompt, Prompt, TextPrompt};

#[derive(Args, Debug)]
pub struct InitArgs {}

/// How an init run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized { docs_removed: bool },
    Cancelled,
}

pub fn execute(_args: InitArgs) -> Result<()> {
    // Ctrl-C must reach the prompt as a key press instead of killing the
    // process, so cancellation goes through the normal cancel path.
    ctrlc::set_handler(|| {}).context("Failed to install Ctrl-C handler")?;

    let project = Project::current_dir().context("Failed to resolve current directory")?;
    let mut prompt = ClackPrompt::new();

    let outcome = run(&project, &mut prompt)?;
    debug!("Init finished: {:?}", outcome);
    Ok(())
}

/// Prompt for the project identity, then rewrite the project.
///
/// Nothing on disk changes until all four answers are in.
pub fn run<P: Prompt>(project: &Project, prompt: &mut P) -> Result<InitOutcome> {
    prompt.intro("🥐 Pastry")?;

    project
        .ensure_manifest()
        .context("Run this command from the root of a Pastry checkout")?;

    let Some(subs) = collect_substitutions(prompt)? else {
        prompt.cancel("Operation cancelled")?;
        info!("Init cancelled, no files modified");
        return Ok(InitOutcome::Cancelled);
    };

    step(
        prompt,
        "Updating package.json...",
        |_| "Package.json updated",
        || {
            project
                .update_manifest(&Placeholders::TEMPLATE, &subs)
                .context("Failed to update package.json")
        },
    )?;

    step(
        prompt,
        "Updating README.md...",
        |_| "README.md updated",
        || {
            project
                .write_readme(&subs.name, &subs.description)
                .context("Failed to write README.md")
        },
    )?;

    let docs_removed = step(
        prompt,
        "Remove template documentation...",
        |removed| {
            if *removed {
                "Template documentation removed"
            } else {
                "No template documentation to remove"
            }
        },
        || project.remove_docs().context("Failed to remove docs"),
    )?;

    prompt.success("✨ Project initialized successfully")?;
    prompt.outro("Get to cooking! 🥐")?;

    Ok(InitOutcome::Initialized { docs_removed })
}

/// Ask the four identity questions in order.
///
/// Returns `None` as soon as one of them is cancelled.
pub fn collect_substitutions<P: Prompt>(prompt: &mut P) -> io::Result<Option<SubstitutionSet>> {
    let Some(name) = prompt.text(&name_prompt())?.submitted() else {
        return Ok(None);
    };
    let Some(author) = prompt.text(&author_prompt())?.submitted() else {
        return Ok(None);
    };
    let Some(github_user) = prompt.text(&github_user_prompt())?.submitted() else {
        return Ok(None);
    };
    let Some(description) = prompt.text(&description_prompt())?.submitted() else {
        return Ok(None);
    };

    Ok(Some(SubstitutionSet::new(
        name,
        author,
        github_user,
        description,
    )))
}

fn name_prompt() -> TextPrompt {
    TextPrompt::new("What is the name of the project?")
        .placeholder(TEMPLATE_NAME)
        .validate(|value| value.is_empty().then_some("Project name is required"))
}

fn author_prompt() -> TextPrompt {
    TextPrompt::new("What is the author of the project?")
        .placeholder(TEMPLATE_AUTHOR)
        .default_value(TEMPLATE_AUTHOR)
}

fn github_user_prompt() -> TextPrompt {
    TextPrompt::new("What is the GitHub user of the project?")
        .placeholder(TEMPLATE_GITHUB_USER)
        .default_value(TEMPLATE_GITHUB_USER)
}

fn description_prompt() -> TextPrompt {
    TextPrompt::new("What is the description of the project?")
        .placeholder(TEMPLATE_DESCRIPTION)
        .validate(|value| value.is_empty().then_some("Description is required"))
}

/// Run one unit of work behind a spinner.
///
/// The stop message is picked from the work's result.
fn step<P, T, D, F>(prompt: &mut P, start: &str, done: D, work: F) -> Result<T>
where
    P: Prompt,
    D: FnOnce(&T) -> &'static str,
    F: FnOnce() -> Result<T>,
{
    prompt.start_step(start)?;
    match work() {
        Ok(value) => {
            prompt.stop_step(done(&value))?;
            Ok(value)
        }
        Err(e) => {
            prompt.fail_step(&format!("{:#}", e))?;
            Err(e)
        }
    }
}
