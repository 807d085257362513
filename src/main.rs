mod fetch;
mod format;
mod parse;
mod rename;
mod select;
mod theme;

use clap::{arg, Command};
use eyre::{bail, eyre, Result};
use log::{debug, warn};
use std::path::PathBuf;

use crate::fetch::structures::Release;
use crate::parse::parse_release;

pub const CLI_NAME: &str = "renamer";
pub const VERSION: &str = "0.1.0";
pub const GITHUB: &str = "github.com/oakes/renamer";

// logging constants
pub const RENAMER_LOGLEVEL: &str = "RENAMER_LOGLEVEL";
pub const RENAMER_STYLE: &str = "RENAMER_STYLE";

/// User intents gathered from the command line.
#[derive(Default, Debug, Clone)]
pub struct Options {
    pub disc: Option<String>,
    pub mix: bool,
    pub join_multi: bool,
    pub join_string: String,
    pub ignore_count: bool,
    pub dry_run: bool,
}

fn cli() -> Command<'static> {
    Command::new(CLI_NAME)
        .about("Rename music files based on track listings from Discogs")
        .arg(arg!(URL: <URL> "The Discogs release URL to use"))
        .arg(
            arg!(FILE: <FILE> ... "The files (tracks) to rename, in track order")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(arg!(MIX: -m --mix "Include the artist in each file name, as part of a multi-artist mix"))
        .arg(arg!(DISC: -d --disc [DISC] "Disc number. Required for multi-disc releases"))
        .arg(arg!(IGNORE_COUNT: --"ignore-count" "Ignore a mismatch in file/track count"))
        .arg(arg!(JOIN_MULTI: -j --"join-multi" "Join multi-part song titles into a single title"))
        .arg(
            arg!(JOIN_STRING: --"join-string" [STRING] "String to use when joining multi-part song titles")
                .default_value(" "),
        )
        .arg(arg!(DRY_RUN: -n --"dry-run" "Show all output like normal, but don't actually rename files"))
}

/// Turn a fetched release into the ordered list of formatted track names.
fn plan(release: &Release, opts: &Options) -> Result<Vec<String>> {
    let parsed = parse_release(release);
    debug!("parsed release: {:?}", parsed);

    if parsed.multi_disc && opts.disc.is_none() {
        bail!("Discogs release contains multiple discs, please specify one with --disc");
    }

    let tracks = select::select_tracks(&parsed.tracks, opts.disc.as_deref(), opts.join_multi);
    let tracks = if opts.join_multi {
        select::join_multi_part_tracks(tracks, &opts.join_string)
    } else {
        tracks
    };
    debug!("selected tracks: {:?}", tracks);

    let artist = parsed
        .artists
        .first()
        .map(|artist| artist.name.clone())
        .ok_or(eyre!("The Discogs release has no artist defined"))?;

    Ok(format::formatted_tracks(&artist, &tracks, opts.mix))
}

async fn run(url: &str, files: &[PathBuf], opts: &Options) -> Result<()> {
    let release_id = fetch::release_id_from_url(url)?;
    let release = fetch::Discogs::new().get_release(&release_id).await?;
    debug!("release data: {:?}", release);

    let tracks = plan(&release, opts)?;
    debug!("formatted tracks: {:?}", tracks);

    if tracks.len() != files.len() {
        warn!(
            "{} track(s) found, {} file(s) supplied",
            tracks.len(),
            files.len()
        );
        if !opts.ignore_count {
            bail!("Number of tracks found does not match the number of files supplied");
        }
    }

    rename::rename_files(files, &tracks, opts.dry_run)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    theme::init_logger();

    let matches = cli().get_matches();
    let url = matches
        .get_one::<String>("URL")
        .ok_or(eyre!("URL argument expected"))?;
    let files = matches
        .get_many::<PathBuf>("FILE")
        .ok_or(eyre!("Expected at least one file argument"))?
        .cloned()
        .collect::<Vec<_>>();
    let opts = Options {
        disc: matches.get_one::<String>("DISC").cloned(),
        mix: matches.is_present("MIX"),
        join_multi: matches.is_present("JOIN_MULTI"),
        join_string: matches
            .get_one::<String>("JOIN_STRING")
            .cloned()
            .unwrap_or_else(|| " ".to_string()),
        ignore_count: matches.is_present("IGNORE_COUNT"),
        dry_run: matches.is_present("DRY_RUN"),
    };
    debug!("options: {:?}", opts);

    run(url, &files, &opts).await
}
