//! RF2 release location and table loading.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use snomed_types::{Rf2Concept, Rf2Description, Rf2LanguageRefsetMember, Rf2Relationship};
use tracing::{debug, info};

use crate::parser::{Rf2Parser, Rf2Record};
use crate::types::{LanguageFiles, ReleaseFiles, ReleaseName, Rf2Config, Rf2Error, Rf2Result};

/// Namespace used in file names of releases whose directory omits one.
pub const INTERNATIONAL_NAMESPACE: &str = "INT";

const RELEASE_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Decodes an RF2 release directory name.
///
/// The name splits on `_` into either 5 parts (package, content type, status,
/// namespace, timestamp) or 4 parts with the namespace omitted. The timestamp
/// must read `YYYYMMDDThhmmssZ`.
pub fn parse_release_name(name: &str) -> Rf2Result<ReleaseName> {
    let invalid = |reason: &str| Rf2Error::InvalidReleaseName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = name.split('_').collect();
    let (package, content_type, status, namespace, timestamp) = match parts.as_slice() {
        [p, c, s, ns, ts] => (*p, *c, *s, *ns, *ts),
        [p, c, s, ts] => (*p, *c, *s, INTERNATIONAL_NAMESPACE, *ts),
        _ => return Err(invalid("expected 4 or 5 '_'-separated elements")),
    };

    if !is_release_timestamp(timestamp) {
        return Err(invalid("timestamp is not YYYYMMDDThhmmssZ"));
    }

    Ok(ReleaseName {
        package: package.to_string(),
        content_type: content_type.to_string(),
        status: status.to_string(),
        namespace: namespace.to_string(),
        timestamp: timestamp.to_string(),
    })
}

fn is_release_timestamp(value: &str) -> bool {
    // chrono's %Y alone would also take longer years.
    value.len() == 16 && NaiveDateTime::parse_from_str(value, RELEASE_TIMESTAMP_FORMAT).is_ok()
}

/// Locates the table files of an unpacked RF2 release.
///
/// `path` is the release directory itself; its name is decoded with
/// [`parse_release_name`]. Base language tables are always required, the
/// secondary ones only when `secondary_language` is given.
///
/// # Errors
/// Returns a configuration error ([`Rf2Error::is_configuration`]) when the
/// directory is missing, misnamed, or lacks an expected file.
pub fn locate_release_files<P: AsRef<Path>>(
    path: P,
    base_language: &str,
    secondary_language: Option<&str>,
) -> Rf2Result<ReleaseFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(Rf2Error::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let release = parse_release_name(&name)?;
    let suffix = format!("{}_{}", release.namespace, release.date());

    let terminology = path.join("Snapshot").join("Terminology");
    let language = path.join("Snapshot").join("Refset").join("Language");

    let language_files = |code: &str| -> Rf2Result<LanguageFiles> {
        Ok(LanguageFiles {
            language_code: code.to_string(),
            description_file: existing(
                terminology.join(format!("sct2_Description_Snapshot-{code}_{suffix}.txt")),
            )?,
            language_refset_file: existing(
                language.join(format!("der2_cRefset_LanguageSnapshot-{code}_{suffix}.txt")),
            )?,
        })
    };

    let files = ReleaseFiles {
        concept_file: existing(terminology.join(format!("sct2_Concept_Snapshot_{suffix}.txt")))?,
        base: language_files(base_language)?,
        secondary: secondary_language.map(language_files).transpose()?,
        relationship_file: existing(
            terminology.join(format!("sct2_Relationship_Snapshot_{suffix}.txt")),
        )?,
        release,
    };

    debug!(
        namespace = %files.release.namespace,
        date = files.release.date(),
        "located RF2 release files"
    );
    Ok(files)
}

fn existing(path: PathBuf) -> Rf2Result<PathBuf> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(Rf2Error::FileNotFound {
            path: path.display().to_string(),
        })
    }
}

/// The raw tables of a release, filtered per [`Rf2Config`].
#[derive(Debug, Clone, Default)]
pub struct ReleaseTables {
    /// Concept rows.
    pub concepts: Vec<Rf2Concept>,
    /// Description rows of the base and secondary languages.
    pub descriptions: Vec<Rf2Description>,
    /// Language refset rows of the base and secondary languages.
    pub language_members: Vec<Rf2LanguageRefsetMember>,
    /// Relationship rows.
    pub relationships: Vec<Rf2Relationship>,
}

/// Reads one RF2 table into a Vec, applying `config` filters.
pub fn read_table<T: Rf2Record, P: AsRef<Path>>(path: P, config: &Rf2Config) -> Rf2Result<Vec<T>> {
    let path = path.as_ref();
    let rows = Rf2Parser::<_, T>::from_path(path, config.clone())?.parse_all()?;
    debug!(path = %path.display(), rows = rows.len(), "read RF2 table");
    Ok(rows)
}

fn read_descriptions(files: &ReleaseFiles, config: &Rf2Config) -> Rf2Result<Vec<Rf2Description>> {
    let mut rows = Vec::new();
    for lang in files.languages() {
        rows.extend(read_table::<Rf2Description, _>(&lang.description_file, config)?);
    }
    Ok(rows)
}

fn read_language_members(
    files: &ReleaseFiles,
    config: &Rf2Config,
) -> Rf2Result<Vec<Rf2LanguageRefsetMember>> {
    let mut rows = Vec::new();
    for lang in files.languages() {
        rows.extend(read_table::<Rf2LanguageRefsetMember, _>(
            &lang.language_refset_file,
            config,
        )?);
    }
    Ok(rows)
}

/// Reads every table of a located release.
///
/// With the `parallel` feature the four tables are read concurrently.
#[cfg(feature = "parallel")]
pub fn read_release(files: &ReleaseFiles, config: &Rf2Config) -> Rf2Result<ReleaseTables> {
    let ((concepts, relationships), (descriptions, language_members)) = rayon::join(
        || {
            rayon::join(
                || read_table::<Rf2Concept, _>(&files.concept_file, config),
                || read_table::<Rf2Relationship, _>(&files.relationship_file, config),
            )
        },
        || {
            rayon::join(
                || read_descriptions(files, config),
                || read_language_members(files, config),
            )
        },
    );

    finish(ReleaseTables {
        concepts: concepts?,
        descriptions: descriptions?,
        language_members: language_members?,
        relationships: relationships?,
    })
}

/// Reads every table of a located release.
#[cfg(not(feature = "parallel"))]
pub fn read_release(files: &ReleaseFiles, config: &Rf2Config) -> Rf2Result<ReleaseTables> {
    finish(ReleaseTables {
        concepts: read_table(&files.concept_file, config)?,
        descriptions: read_descriptions(files, config)?,
        language_members: read_language_members(files, config)?,
        relationships: read_table(&files.relationship_file, config)?,
    })
}

fn finish(tables: ReleaseTables) -> Rf2Result<ReleaseTables> {
    info!(
        concepts = tables.concepts.len(),
        descriptions = tables.descriptions.len(),
        language_members = tables.language_members.len(),
        relationships = tables.relationships.len(),
        "read RF2 release tables"
    );
    Ok(tables)
}
