use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::info;

use crate::{
    browser,
    cli::{create_spinner, PublishArgs, SourceArgs},
    git::Repo,
};

use super::render_pages;

/// Renders the pages, commits and pushes them, then opens the landing page.
///
/// Returns the landing page path.
pub async fn publish(source: &SourceArgs, args: &PublishArgs) -> Result<String> {
    let repo = Repo::open(&args.repo)?;

    let pages = render_pages(source, &args.output_dir()).await?;
    println!("Charts saved and index.html created.");

    let index = pages
        .last()
        .cloned()
        .ok_or_else(|| anyhow!("No pages were written"))?;

    info!(repo = %repo.path().display(), pages = pages.len(), "Committing pages");
    commit_pages(&repo, &pages, &args.message)?;

    if args.no_push {
        info!("Skipping push");
    } else {
        push(&repo, &args.remote)?;
    }

    if !args.no_open {
        browser::open(&index)?;
    }

    Ok(index.to_string_lossy().to_string())
}

fn commit_pages(repo: &Repo, pages: &[PathBuf], message: &str) -> Result<()> {
    repo.add(pages)?;
    println!("Status after staging the pages:");
    println!("{}", repo.status()?);

    repo.commit(message)?;
    println!("Last commit:");
    println!("{}", repo.last_commit_log()?);

    Ok(())
}

fn push(repo: &Repo, remote: &str) -> Result<()> {
    let bar = create_spinner(format!("Pushing to {}...", remote));
    match repo.push(remote) {
        Ok(()) => {
            bar.finish_with_message(format!("Pages pushed to {}", remote));
            Ok(())
        }
        Err(e) => {
            bar.abandon_with_message("Push failed");
            Err(e)
        }
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use std::{fs, process::Command};

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        chart::{page::write_pages, Charts, DEFAULT_SITE},
        reading::Measurement,
    };

    fn git(dir: &std::path::Path, args: &[&str]) -> bool {
        Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(args)
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    #[test]
    fn should_commit_the_four_pages() {
        let dir = TempDir::new().unwrap();
        if !git(dir.path(), &["init"]) {
            return;
        }
        git(dir.path(), &["config", "user.name", "Pluvio Test"]);
        git(dir.path(), &["config", "user.email", "pluvio@example.com"]);
        git(dir.path(), &["config", "commit.gpgsign", "false"]);

        let measurements = vec![
            Measurement { date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), mm: 3.2 },
            Measurement { date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(), mm: 4.0 },
        ];
        let pages = write_pages(
            dir.path(),
            &Charts::build(&measurements, DEFAULT_SITE),
            "window.Plotly = {};",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not published").unwrap();

        let repo = Repo::open(dir.path()).unwrap();
        commit_pages(&repo, &pages, "Mise à jour des graphiques").unwrap();

        let output = Command::new("git")
            .arg("-C")
            .arg(dir.path())
            .args(["show", "--name-only", "--format=%s", "HEAD"])
            .output()
            .unwrap();
        let shown = String::from_utf8_lossy(&output.stdout);
        let mut files: Vec<_> = shown.lines().skip(1).filter(|l| !l.is_empty()).collect();
        files.sort();

        assert!(shown.starts_with("Mise à jour des graphiques"));
        assert_eq!(
            files,
            vec![
                "graphique_par_jour.html",
                "graphique_par_mois.html",
                "graphique_par_trimestre.html",
                "index.html"
            ]
        );
    }
}
