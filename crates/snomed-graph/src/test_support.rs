//! Shared test fixtures.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use snomed_loader::ReleaseTables;
use snomed_types::well_known::{
    ACCEPTABLE, AFTER, ASSOCIATED_MORPHOLOGY, BODY_STRUCTURE, CLINICAL_COURSE, CLINICAL_FINDING,
    FINDING_SITE, FULLY_SPECIFIED_NAME, GB_ENGLISH_LANG_REFSET, IS_A, PREFERRED, PROCEDURE,
    QUALIFIER_VALUE, SNOMED_CT_MODEL_COMPONENT, SNOMED_CT_ROOT, SYNONYM, US_ENGLISH_LANG_REFSET,
};
use snomed_types::{Rf2Concept, Rf2Description, Rf2LanguageRefsetMember, Rf2Relationship, SctId};

use crate::concept::{ConceptNode, EdgeRecord};
use crate::config::GraphConfig;
use crate::graph::SnomedGraph;

/// Test-only concept hanging below two unrelated parents.
pub const TEST: SctId = 1000001;

/// French language refset of the fixture release.
pub const FRENCH_LANG_REFSET: SctId = 10031000315102;

pub const RELEASE: &str = "SnomedCT_ManagedServiceFR_PRODUCTION_FR1000315_20240621T120000Z";

/// A node with only its FSN set.
pub fn node(id: SctId, fsn: &str) -> ConceptNode {
    ConceptNode {
        id,
        fsn: fsn.to_string(),
        ..ConceptNode::default()
    }
}

pub fn ids(nodes: Vec<&ConceptNode>) -> Vec<SctId> {
    nodes.iter().map(|n| n.id).collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn concept(
    id: SctId,
    fsn: &str,
    preferred_term: &str,
    synonyms: &[&str],
    secondary_preferred_term: &str,
    secondary_synonyms: &[&str],
) -> ConceptNode {
    ConceptNode {
        id,
        fsn: fsn.to_string(),
        preferred_term: preferred_term.to_string(),
        secondary_preferred_term: secondary_preferred_term.to_string(),
        synonyms: strings(synonyms),
        secondary_synonyms: strings(secondary_synonyms),
    }
}

/// Postoperative myocardial infarction and its neighbourhood, French enabled.
pub fn fixture() -> SnomedGraph {
    #[rustfmt::skip]
    let nodes = vec![
        concept(129574000, "Postoperative myocardial infarction (disorder)", "Postoperative myocardial infarction", &[], "infarctus myocardique postoperatoire", &[]),
        concept(1163440003, "Postoperative acute myocardial infarction (disorder)", "Postoperative acute myocardial Infarction", &["Acute myocardial infarction following operative procedure"], "infarctus du myocarde aigu postoperatoire", &["IDM (infarctus du myocarde) aigu postoperatoire"]),
        concept(311796008, "Postoperative subendocardial myocardial infarction (disorder)", "Postoperative subendocardial myocardial infarction", &[], "infarctus myocardique sous-endocardique postoperatoire", &[]),
        concept(311792005, "Postoperative transmural myocardial infarction of anterior wall (disorder)", "Postoperative transmural myocardial infarction of anterior wall", &[], "infarctus myocardique transmural anterieur postoperatoire", &[]),
        concept(311793000, "Postoperative transmural myocardial infarction of inferior wall (disorder)", "Postoperative transmural myocardial infarction of inferior wall", &[], "infarctus myocardique transmural inferieur postoperatoire", &[]),
        concept(IS_A, "Is a (attribute)", "Is a", &[], "est un(e)", &[]),
        concept(FINDING_SITE, "Finding site (attribute)", "Finding site", &[], "localisation de constatation", &[]),
        concept(ASSOCIATED_MORPHOLOGY, "Associated morphology (attribute)", "Associated morphology", &["Morphology"], "morphologie associee", &[]),
        concept(AFTER, "After (attribute)", "After", &["Following"], "", &[]),
        concept(CLINICAL_COURSE, "Clinical course (attribute)", "Clinical course", &[], "evolution clinique", &[]),
        concept(74281007, "Myocardium structure (body structure)", "Myocardium structure", &["Cardiac muscle", "Myocardium"], "myocarde", &["myocardium", "structure du myocarde", "structure myocardique"]),
        concept(55641003, "Infarct (morphologic abnormality)", "Infarct", &["Infarction"], "infarctus", &[]),
        concept(387713003, "Surgical procedure (procedure)", "Surgical procedure", &["Operation", "Operative procedure", "Surgery"], "intervention chirurgicale", &[]),
        concept(55470003, "Acute infarct (morphologic abnormality)", "Acute infarct", &["Recent infarct"], "", &[]),
        concept(424124008, "Sudden onset AND/OR short duration (qualifier value)", "Sudden onset AND/OR short duration", &[], "apparition soudaine ou de courte duree", &[]),
        concept(58148009, "Structure of subendocardial myocardium (body structure)", "Structure of subendocardial myocardium", &["Subendocardial myocardium"], "myocarde sous-endocardique", &[]),
        concept(6975006, "Structure of anterior myocardium (body structure)", "Structure of anterior myocardium", &["Anterior myocardium"], "myocarde anterieur", &["paroi anterieure du myocarde", "structure du myocarde anterieur"]),
        concept(CLINICAL_FINDING, "Clinical finding (finding)", "Clinical finding", &[], "constatation clinique", &[]),
        concept(SNOMED_CT_MODEL_COMPONENT, "SNOMED CT Model Component (metadata)", "SNOMED CT Model Component", &[], "", &[]),
        concept(BODY_STRUCTURE, "Body structure (body structure)", "Body structure", &["Body structures"], "structure corporelle", &[]),
        concept(PROCEDURE, "Procedure (procedure)", "Procedure", &[], "procedure", &["intervention"]),
        concept(QUALIFIER_VALUE, "Qualifier value (qualifier value)", "Qualifier value", &[], "valeur de l'attribut", &[]),
        concept(SNOMED_CT_ROOT, "SNOMED CT Concept (SNOMED RT+CTV3)", "SNOMED CT concept", &[], "concept SNOMED CT", &[]),
        concept(TEST, "Test (test)", "Test", &[], "", &[]),
    ];

    let disorders = [129574000, 1163440003, 311796008, 311792005, 311793000];
    let mut edges = Vec::new();
    let mut add = |source: SctId, target: SctId, group: u16, attribute: SctId| {
        edges.push(EdgeRecord {
            source,
            target,
            group,
            attribute,
        })
    };

    for source in &disorders[1..] {
        add(*source, 129574000, 0, IS_A);
    }
    for source in [IS_A, FINDING_SITE, ASSOCIATED_MORPHOLOGY, AFTER, CLINICAL_COURSE] {
        add(source, SNOMED_CT_MODEL_COMPONENT, 0, IS_A);
    }
    for source in [74281007, 55641003, 55470003, 58148009, 6975006] {
        add(source, BODY_STRUCTURE, 0, IS_A);
    }
    add(387713003, PROCEDURE, 0, IS_A);
    add(424124008, QUALIFIER_VALUE, 0, IS_A);
    add(129574000, CLINICAL_FINDING, 0, IS_A);
    for source in [CLINICAL_FINDING, SNOMED_CT_MODEL_COMPONENT, BODY_STRUCTURE, PROCEDURE, QUALIFIER_VALUE] {
        add(source, SNOMED_CT_ROOT, 0, IS_A);
    }
    add(TEST, 311793000, 0, IS_A);
    add(TEST, IS_A, 0, IS_A);

    for (source, site) in disorders
        .iter()
        .zip([74281007, 74281007, 58148009, 6975006, 74281007])
    {
        add(*source, site, 1, FINDING_SITE);
    }
    for (source, morphology) in disorders
        .iter()
        .zip([55641003, 55470003, 55641003, 55641003, 55641003])
    {
        add(*source, morphology, 1, ASSOCIATED_MORPHOLOGY);
    }
    for source in disorders {
        add(source, 387713003, 2, AFTER);
    }
    add(1163440003, 424124008, 3, CLINICAL_COURSE);

    SnomedGraph::from_parts(nodes, edges, SNOMED_CT_ROOT, GraphConfig::default())
        .expect("fixture edges reference fixture nodes")
}

fn description(
    id: SctId,
    active: bool,
    concept_id: SctId,
    language_code: &str,
    type_id: SctId,
    term: &str,
) -> Rf2Description {
    Rf2Description {
        id,
        active,
        concept_id,
        language_code: language_code.to_string(),
        type_id,
        term: term.to_string(),
    }
}

fn member(
    active: bool,
    refset_id: SctId,
    referenced_component_id: SctId,
    acceptability_id: SctId,
) -> Rf2LanguageRefsetMember {
    Rf2LanguageRefsetMember {
        active,
        refset_id,
        referenced_component_id,
        acceptability_id,
    }
}

/// A toe, a myocardial infarction and the attribute linking them, with an
/// inactive concept and inactive rows mixed in.
///
/// The attribute concept 4009 is not the is-a attribute, so the single
/// active relationship is non-hierarchical.
pub fn release_tables() -> ReleaseTables {
    let concepts = vec![
        Rf2Concept { id: 1009, active: true },
        Rf2Concept { id: 2009, active: true },
        Rf2Concept { id: 3009, active: false },
        Rf2Concept { id: 4009, active: true },
    ];

    let descriptions = vec![
        description(1019, true, 1009, "en", FULLY_SPECIFIED_NAME, "Toe structure (body structure)"),
        description(2019, true, 1009, "en", SYNONYM, "Toe structure US"),
        description(3019, true, 1009, "en", SYNONYM, "Toe structure GB"),
        description(4019, true, 1009, "en", SYNONYM, "Toe"),
        description(5019, true, 1009, "en", SYNONYM, "Digit of foot"),
        description(6019, false, 1009, "en", SYNONYM, "Finger of foot"),
        description(7019, true, 3009, "en", FULLY_SPECIFIED_NAME, "Toe structure (environment)"),
        description(8019, true, 2009, "en", FULLY_SPECIFIED_NAME, "Myocardial infarction (disorder)"),
        description(9019, true, 2009, "en", SYNONYM, "Myocardial infarction"),
        description(10019, true, 4009, "en", FULLY_SPECIFIED_NAME, "Is a (attribute)"),
        description(11019, true, 4009, "en", SYNONYM, "Is a"),
        description(12019, true, 2009, "fr", SYNONYM, "crise cardiaque"),
        description(13019, true, 2009, "fr", SYNONYM, "infarctus du myocarde"),
    ];

    let language_members = vec![
        member(true, US_ENGLISH_LANG_REFSET, 1019, PREFERRED),
        member(true, US_ENGLISH_LANG_REFSET, 2019, PREFERRED),
        member(true, GB_ENGLISH_LANG_REFSET, 3019, PREFERRED),
        member(true, US_ENGLISH_LANG_REFSET, 4019, ACCEPTABLE),
        member(true, US_ENGLISH_LANG_REFSET, 5019, ACCEPTABLE),
        member(false, US_ENGLISH_LANG_REFSET, 6019, ACCEPTABLE),
        member(false, US_ENGLISH_LANG_REFSET, 7019, PREFERRED),
        member(true, US_ENGLISH_LANG_REFSET, 8019, PREFERRED),
        member(true, US_ENGLISH_LANG_REFSET, 9019, PREFERRED),
        member(true, US_ENGLISH_LANG_REFSET, 10019, PREFERRED),
        member(true, US_ENGLISH_LANG_REFSET, 11019, PREFERRED),
        member(true, FRENCH_LANG_REFSET, 12019, PREFERRED),
        member(true, FRENCH_LANG_REFSET, 13019, ACCEPTABLE),
    ];

    let relationships = vec![
        Rf2Relationship {
            active: true,
            source_id: 1009,
            destination_id: 2009,
            relationship_group: 0,
            type_id: 4009,
        },
        Rf2Relationship {
            active: false,
            source_id: 1009,
            destination_id: 2009,
            relationship_group: 1,
            type_id: 4009,
        },
    ];

    ReleaseTables {
        concepts,
        descriptions,
        language_members,
        relationships,
    }
}

/// Writes `tables` as an unpacked RF2 release named [`RELEASE`] under `root`.
///
/// Description and language refset rows are split into English and French
/// tables by description language.
pub fn write_release(root: &Path, tables: &ReleaseTables) -> PathBuf {
    const SUFFIX: &str = "FR1000315_20240621";
    const DATE: &str = "20240621";
    const MODULE: &str = "900000000000207008";

    let dir = root.join(RELEASE);
    let terminology = dir.join("Snapshot").join("Terminology");
    let language = dir.join("Snapshot").join("Refset").join("Language");
    fs::create_dir_all(&terminology).unwrap();
    fs::create_dir_all(&language).unwrap();

    let flag = |active: bool| u8::from(active);

    let mut concepts = String::from("id\teffectiveTime\tactive\tmoduleId\tdefinitionStatusId\n");
    for c in &tables.concepts {
        writeln!(
            concepts,
            "{}\t{DATE}\t{}\t{MODULE}\t900000000000074008",
            c.id,
            flag(c.active)
        )
        .unwrap();
    }
    fs::write(
        terminology.join(format!("sct2_Concept_Snapshot_{SUFFIX}.txt")),
        concepts,
    )
    .unwrap();

    let mut relationships = String::from(
        "id\teffectiveTime\tactive\tmoduleId\tsourceId\tdestinationId\trelationshipGroup\ttypeId\tcharacteristicTypeId\tmodifierId\n",
    );
    for (i, r) in tables.relationships.iter().enumerate() {
        writeln!(
            relationships,
            "{}\t{DATE}\t{}\t{MODULE}\t{}\t{}\t{}\t{}\t900000000000011006\t900000000000451002",
            i + 1,
            flag(r.active),
            r.source_id,
            r.destination_id,
            r.relationship_group,
            r.type_id
        )
        .unwrap();
    }
    fs::write(
        terminology.join(format!("sct2_Relationship_Snapshot_{SUFFIX}.txt")),
        relationships,
    )
    .unwrap();

    for code in ["en", "fr"] {
        let mut descriptions = String::from(
            "id\teffectiveTime\tactive\tmoduleId\tconceptId\tlanguageCode\ttypeId\tterm\tcaseSignificanceId\n",
        );
        let mut members = String::from(
            "id\teffectiveTime\tactive\tmoduleId\trefsetId\treferencedComponentId\tacceptabilityId\n",
        );
        for d in tables.descriptions.iter().filter(|d| d.language_code == code) {
            writeln!(
                descriptions,
                "{}\t{DATE}\t{}\t{MODULE}\t{}\t{code}\t{}\t{}\t900000000000448009",
                d.id,
                flag(d.active),
                d.concept_id,
                d.type_id,
                d.term
            )
            .unwrap();
            for m in tables
                .language_members
                .iter()
                .filter(|m| m.referenced_component_id == d.id)
            {
                writeln!(
                    members,
                    "{}-{}\t{DATE}\t{}\t{MODULE}\t{}\t{}\t{}",
                    m.refset_id,
                    d.id,
                    flag(m.active),
                    m.refset_id,
                    m.referenced_component_id,
                    m.acceptability_id
                )
                .unwrap();
            }
        }
        fs::write(
            terminology.join(format!("sct2_Description_Snapshot-{code}_{SUFFIX}.txt")),
            descriptions,
        )
        .unwrap();
        fs::write(
            language.join(format!("der2_cRefset_LanguageSnapshot-{code}_{SUFFIX}.txt")),
            members,
        )
        .unwrap();
    }

    dir
}
