//! Term search over the flattened description table.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use snomed_types::{Acceptability, SctId};

use crate::error::{GraphError, GraphResult};
use crate::graph::SnomedGraph;

/// One description of one concept, as searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRow<'g> {
    /// Concept identifier.
    pub id: SctId,
    /// The concept's fully specified name.
    pub fsn: &'g str,
    /// The description term.
    pub term: &'g str,
    /// Preferred term or acceptable synonym.
    pub acceptability: Acceptability,
    /// Language of the term.
    pub language: &'g str,
}

/// Acceptability restriction of a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AcceptabilityFilter {
    /// Preferred terms and synonyms alike.
    #[default]
    Unspecified,
    /// Preferred terms only.
    Preferred,
    /// Acceptable synonyms only.
    Acceptable,
}

impl AcceptabilityFilter {
    fn admits(self, acceptability: Acceptability) -> bool {
        match self {
            Self::Unspecified => true,
            Self::Preferred => acceptability == Acceptability::Preferred,
            Self::Acceptable => acceptability == Acceptability::Acceptable,
        }
    }
}

impl FromStr for AcceptabilityFilter {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unspecified" => Ok(Self::Unspecified),
            "preferred" | "pref" => Ok(Self::Preferred),
            "acceptable" | "accept" => Ok(Self::Acceptable),
            _ => Err(GraphError::InvalidAcceptability(s.to_string())),
        }
    }
}

impl fmt::Display for AcceptabilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unspecified => "unspecified",
            Self::Preferred => "preferred",
            Self::Acceptable => "acceptable",
        })
    }
}

/// Parameters of [`SnomedGraph::search`].
///
/// Patterns match anywhere in the text, as literal substrings unless the
/// matching `*_is_regex` flag is set, and ignore case unless the matching
/// `*_case_sensitive` flag is set.
///
/// ```
/// use snomed_graph::{AcceptabilityFilter, SearchQuery};
///
/// let query = SearchQuery::new("cardi")
///     .acceptability(AcceptabilityFilter::Preferred)
///     .language("fr");
/// assert_eq!(query.term, "cardi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery<'q> {
    /// Pattern searched in terms.
    pub term: &'q str,
    /// Restrict to the subgraph rooted at this concept.
    pub scope: Option<SctId>,
    /// Acceptability restriction.
    pub acceptability: AcceptabilityFilter,
    /// When false, select terms that do *not* match.
    pub present: bool,
    /// Term language; the graph's search language when `None`.
    pub language: Option<&'q str>,
    /// Treat `term` as a regular expression.
    pub term_is_regex: bool,
    /// Match `term` case-sensitively.
    pub term_case_sensitive: bool,
    /// Pattern the concept's FSN must match.
    pub fsn: Option<&'q str>,
    /// Treat `fsn` as a regular expression.
    pub fsn_is_regex: bool,
    /// Match `fsn` case-sensitively.
    pub fsn_case_sensitive: bool,
}

impl<'q> SearchQuery<'q> {
    /// Query for terms containing `term`.
    pub fn new(term: &'q str) -> Self {
        Self {
            term,
            scope: None,
            acceptability: AcceptabilityFilter::Unspecified,
            present: true,
            language: None,
            term_is_regex: false,
            term_case_sensitive: false,
            fsn: None,
            fsn_is_regex: false,
            fsn_case_sensitive: false,
        }
    }

    /// Restricts the search to the subgraph rooted at `concept`.
    pub fn scope(mut self, concept: SctId) -> Self {
        self.scope = Some(concept);
        self
    }

    /// Restricts the search to preferred terms or synonyms.
    pub fn acceptability(mut self, filter: AcceptabilityFilter) -> Self {
        self.acceptability = filter;
        self
    }

    /// Selects terms that do not match instead.
    pub fn absent(mut self) -> Self {
        self.present = false;
        self
    }

    /// Searches terms of `language`.
    pub fn language(mut self, language: &'q str) -> Self {
        self.language = Some(language);
        self
    }

    /// Treats the term pattern as a regular expression.
    pub fn regex(mut self) -> Self {
        self.term_is_regex = true;
        self
    }

    /// Matches the term pattern case-sensitively.
    pub fn case_sensitive(mut self) -> Self {
        self.term_case_sensitive = true;
        self
    }

    /// Requires the concept's FSN to match `pattern`.
    pub fn fsn(mut self, pattern: &'q str) -> Self {
        self.fsn = Some(pattern);
        self
    }

    /// Treats the FSN pattern as a regular expression.
    pub fn fsn_regex(mut self) -> Self {
        self.fsn_is_regex = true;
        self
    }

    /// Matches the FSN pattern case-sensitively.
    pub fn fsn_case_sensitive(mut self) -> Self {
        self.fsn_case_sensitive = true;
        self
    }
}

fn matcher(pattern: &str, is_regex: bool, case_sensitive: bool) -> GraphResult<Regex> {
    let source = if is_regex {
        pattern.to_string()
    } else {
        regex::escape(pattern)
    };
    Ok(RegexBuilder::new(&source)
        .case_insensitive(!case_sensitive)
        .build()?)
}

impl SnomedGraph {
    /// Flattens every concept's preferred terms and synonyms into rows.
    ///
    /// Empty terms produce no row.
    pub fn term_rows(&self) -> Vec<TermRow<'_>> {
        let config = self.config();
        let base = config.base_language.as_str();
        let secondary = config.secondary_language.as_deref();

        let mut rows = Vec::new();
        for node in self.nodes() {
            let mut terms = vec![(node.preferred_term.as_str(), Acceptability::Preferred, base)];
            terms.extend(
                node.synonyms
                    .iter()
                    .map(|s| (s.as_str(), Acceptability::Acceptable, base)),
            );
            if let Some(secondary) = secondary {
                terms.push((
                    node.secondary_preferred_term.as_str(),
                    Acceptability::Preferred,
                    secondary,
                ));
                terms.extend(
                    node.secondary_synonyms
                        .iter()
                        .map(|s| (s.as_str(), Acceptability::Acceptable, secondary)),
                );
            }

            rows.extend(
                terms
                    .into_iter()
                    .filter(|(term, _, _)| !term.is_empty())
                    .map(|(term, acceptability, language)| TermRow {
                        id: node.id,
                        fsn: &node.fsn,
                        term,
                        acceptability,
                        language,
                    }),
            );
        }
        rows
    }

    /// Concepts with a term matching `query`, in no particular order.
    ///
    /// # Errors
    /// Fails on an invalid pattern, or an unknown scope concept.
    pub fn search(&self, query: &SearchQuery<'_>) -> GraphResult<Vec<SctId>> {
        let term = matcher(query.term, query.term_is_regex, query.term_case_sensitive)?;
        let fsn = query
            .fsn
            .map(|p| matcher(p, query.fsn_is_regex, query.fsn_case_sensitive))
            .transpose()?;
        let language = query.language.unwrap_or_else(|| self.config().search_language());

        let scoped;
        let graph = match query.scope {
            Some(root) => {
                scoped = self.subgraph(root, true, false)?;
                &scoped
            }
            None => self,
        };

        let mut seen = HashSet::new();
        Ok(graph
            .term_rows()
            .into_iter()
            .filter(|row| query.acceptability.admits(row.acceptability))
            .filter(|row| fsn.as_ref().map_or(true, |re| re.is_match(row.fsn)))
            .filter(|row| row.language == language && term.is_match(row.term) == query.present)
            .map(|row| row.id)
            .filter(|id| seen.insert(*id))
            .collect())
    }
}
