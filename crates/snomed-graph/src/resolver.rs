//! Description resolution.
//!
//! Joins the concept, description and language refset tables into one
//! [`ConceptNode`] per active concept:
//!
//! 1. inactive concepts, descriptions and refset members are ignored;
//! 2. preferred members of the excluded dialect refset are dropped, then each
//!    description takes the acceptability of its members, and descriptions
//!    left without one are discarded;
//! 3. identical (concept, language, type, term, acceptability) rows collapse;
//! 4. the preferred non-FSN description of a language is its preferred term,
//!    and a second one is an error;
//! 5. acceptable descriptions of a language are its synonyms;
//! 6. the base-language FSN is mandatory, and a second, different one is an
//!    error.

use std::collections::{HashMap, HashSet};

use snomed_types::{Rf2Concept, Rf2Description, Rf2LanguageRefsetMember, SctId};
use tracing::{debug, info};

use crate::concept::ConceptNode;
use crate::config::GraphConfig;
use crate::error::{GraphError, GraphResult};

#[derive(Debug, Default)]
struct Draft {
    fsn: Option<String>,
    preferred: [Option<String>; 2],
    synonyms: [Vec<String>; 2],
}

/// Resolves the descriptions of every active concept.
///
/// Nodes are returned in concept table order. Active concepts without any
/// surviving description are skipped.
pub fn resolve_descriptions(
    concepts: &[Rf2Concept],
    descriptions: &[Rf2Description],
    language_members: &[Rf2LanguageRefsetMember],
    config: &GraphConfig,
) -> GraphResult<Vec<ConceptNode>> {
    let active: HashSet<SctId> = concepts.iter().filter(|c| c.active).map(|c| c.id).collect();

    let mut acceptability: HashMap<SctId, Vec<SctId>> = HashMap::new();
    for member in language_members.iter().filter(|m| m.active) {
        if member.refset_id == config.excluded_preferred_refset
            && member.acceptability_id == config.preferred
        {
            continue;
        }
        acceptability
            .entry(member.referenced_component_id)
            .or_default()
            .push(member.acceptability_id);
    }

    let languages = [
        Some(config.base_language.as_str()),
        config.secondary_language.as_deref(),
    ];

    let mut seen = HashSet::new();
    let mut drafts: HashMap<SctId, Draft> = HashMap::new();

    for desc in descriptions
        .iter()
        .filter(|d| d.active && active.contains(&d.concept_id))
    {
        let Some(slot) = languages
            .iter()
            .position(|l| *l == Some(desc.language_code.as_str()))
        else {
            continue;
        };
        let Some(acceptabilities) = acceptability.get(&desc.id) else {
            continue;
        };

        for &acceptability_id in acceptabilities {
            let key = (
                desc.concept_id,
                desc.language_code.as_str(),
                desc.type_id,
                desc.term.as_str(),
                acceptability_id,
            );
            if !seen.insert(key) {
                continue;
            }

            let draft = drafts.entry(desc.concept_id).or_default();
            let is_fsn = desc.type_id == config.fsn_type;

            if is_fsn && slot == 0 {
                match &draft.fsn {
                    Some(first) if *first != desc.term => {
                        return Err(GraphError::DuplicateFsn {
                            concept: desc.concept_id,
                            first: first.clone(),
                            second: desc.term.clone(),
                        });
                    }
                    Some(_) => {}
                    None => draft.fsn = Some(desc.term.clone()),
                }
            }

            if acceptability_id == config.preferred && !is_fsn {
                if let Some(first) = &draft.preferred[slot] {
                    return Err(GraphError::DuplicatePreferredTerm {
                        concept: desc.concept_id,
                        language: desc.language_code.clone(),
                        first: first.clone(),
                        second: desc.term.clone(),
                    });
                }
                draft.preferred[slot] = Some(desc.term.clone());
            } else if acceptability_id == config.acceptable {
                draft.synonyms[slot].push(desc.term.clone());
            }
        }
    }

    let mut nodes = Vec::with_capacity(drafts.len());
    for concept in concepts.iter().filter(|c| c.active) {
        let Some(draft) = drafts.remove(&concept.id) else {
            debug!(concept = concept.id, "skipping concept without active descriptions");
            continue;
        };
        let fsn = draft
            .fsn
            .ok_or(GraphError::MissingFsn { concept: concept.id })?;

        let [preferred_term, secondary_preferred_term] = draft.preferred;
        let [mut synonyms, mut secondary_synonyms] = draft.synonyms;
        synonyms.sort_by_cached_key(|s| s.to_lowercase());
        secondary_synonyms.sort_by_cached_key(|s| s.to_lowercase());

        nodes.push(ConceptNode {
            id: concept.id,
            fsn,
            preferred_term: preferred_term.unwrap_or_default(),
            secondary_preferred_term: secondary_preferred_term.unwrap_or_default(),
            synonyms,
            secondary_synonyms,
        });
    }

    info!(concepts = nodes.len(), "resolved concept descriptions");
    Ok(nodes)
}
