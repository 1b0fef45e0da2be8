use anyhow::{Context, Result, bail};
use serde_json::json;
use tracing::{debug, info};

use patedu_content::bedside_screening::{
    all_bedside_screening, bedside_screening_by_complexity, get_bedside_screening,
    search_bedside_screening,
};
use patedu_content::procedures::{
    all_procedures, get_procedure, procedures_by_category, procedures_by_complexity,
    search_procedures,
};
use patedu_content::registry;
use patedu_model::{BedsideScreeningEntry, ProcedureEntry};

use crate::cli::{ListArgs, SearchArgs, ShowArgs, StoreArg};
use crate::render::{
    print_bedside_screening_detail, print_bedside_screening_list, print_procedure_detail,
    print_procedure_list, print_verify_summary,
};

/// Resolve an id against both stores and print the full record.
///
/// Returns exit code 1 when the id resolves in neither store.
pub fn run_show(args: &ShowArgs, json: bool) -> Result<i32> {
    if let Some(entry) = get_procedure(&args.id) {
        debug!(id = %entry.id, store = "procedures", "id resolved");
        if json {
            println!("{}", serde_json::to_string_pretty(entry)?);
        } else {
            print_procedure_detail(entry, args.lang);
        }
        return Ok(0);
    }
    if let Some(entry) = get_bedside_screening(&args.id) {
        debug!(id = %entry.id, store = "bedside-screening", "id resolved");
        if json {
            println!("{}", serde_json::to_string_pretty(entry)?);
        } else {
            print_bedside_screening_detail(entry, args.lang);
        }
        return Ok(0);
    }
    eprintln!("error: no record with id `{}`", args.id);
    Ok(1)
}

pub fn run_search(args: &SearchArgs, json: bool) -> Result<i32> {
    let procedures = search_procedures(&args.keyword);
    let bedside_screening = search_bedside_screening(&args.keyword);
    info!(
        keyword = %args.keyword,
        procedure_hits = procedures.len(),
        bedside_screening_hits = bedside_screening.len(),
        "search complete"
    );
    if json {
        let body = json!({
            "keyword": args.keyword,
            "procedures": procedures,
            "bedside_screening": bedside_screening,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(0);
    }
    if procedures.is_empty() && bedside_screening.is_empty() {
        println!("No records match `{}`.", args.keyword);
        return Ok(0);
    }
    if !procedures.is_empty() {
        println!("Procedures:");
        print_procedure_list(&procedures, args.lang);
    }
    if !bedside_screening.is_empty() {
        println!("Bedside and screening:");
        print_bedside_screening_list(&bedside_screening, args.lang);
    }
    Ok(0)
}

pub fn run_list(args: &ListArgs, json: bool) -> Result<i32> {
    if args.category.is_some() && args.store == StoreArg::BedsideScreening {
        bail!("--category applies to the procedures store");
    }

    let procedures = if args.store == StoreArg::BedsideScreening {
        Vec::new()
    } else {
        filtered_procedures(args)
    };
    // --category narrows the listing to the procedure store
    let bedside_screening =
        if args.store == StoreArg::Procedures || args.category.is_some() {
            Vec::new()
        } else {
            filtered_bedside_screening(args)
        };
    info!(
        procedure_count = procedures.len(),
        bedside_screening_count = bedside_screening.len(),
        "list complete"
    );

    if json {
        let body = json!({
            "procedures": procedures,
            "bedside_screening": bedside_screening,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(0);
    }
    if procedures.is_empty() && bedside_screening.is_empty() {
        println!("No records match the given filters.");
        return Ok(0);
    }
    if !procedures.is_empty() {
        println!("Procedures:");
        print_procedure_list(&procedures, args.lang);
    }
    if !bedside_screening.is_empty() {
        println!("Bedside and screening:");
        print_bedside_screening_list(&bedside_screening, args.lang);
    }
    Ok(0)
}

/// Verify id integrity of both stores and report record counts.
///
/// A failure here means the compiled-in arrays are malformed, so it
/// exits non-zero.
pub fn run_verify(json: bool) -> Result<i32> {
    let summary = registry().verify().context("verify content stores")?;
    info!(
        procedure_count = summary.procedure_count,
        bedside_screening_count = summary.bedside_screening_count,
        "stores verified"
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_verify_summary(&summary);
    }
    Ok(0)
}

fn filtered_procedures(args: &ListArgs) -> Vec<&'static ProcedureEntry> {
    let mut entries = match (args.category, args.complexity) {
        (Some(category), _) => procedures_by_category(category),
        (None, Some(complexity)) => procedures_by_complexity(complexity),
        (None, None) => all_procedures().collect(),
    };
    if args.category.is_some() {
        if let Some(complexity) = args.complexity {
            entries.retain(|entry| entry.complexity == complexity);
        }
    }
    if let Some(specialty) = &args.specialty {
        entries.retain(|entry| entry.has_specialty(specialty));
    }
    if let Some(region) = &args.body_region {
        entries.retain(|entry| entry.has_body_region(region));
    }
    entries
}

fn filtered_bedside_screening(args: &ListArgs) -> Vec<&'static BedsideScreeningEntry> {
    let mut entries = match args.complexity {
        Some(complexity) => bedside_screening_by_complexity(complexity),
        None => all_bedside_screening().collect(),
    };
    if let Some(specialty) = &args.specialty {
        entries.retain(|entry| entry.has_specialty(specialty));
    }
    if let Some(region) = &args.body_region {
        entries.retain(|entry| entry.has_body_region(region));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use patedu_model::{ComplexityLevel, Language, ProcedureCategory};

    fn list_args() -> ListArgs {
        ListArgs {
            store: StoreArg::All,
            category: None,
            complexity: None,
            specialty: None,
            body_region: None,
            lang: Language::English,
        }
    }

    #[test]
    fn test_unfiltered_list_covers_both_stores() {
        let args = list_args();
        assert_eq!(filtered_procedures(&args).len(), all_procedures().count());
        assert_eq!(
            filtered_bedside_screening(&args).len(),
            all_bedside_screening().count()
        );
    }

    #[test]
    fn test_category_and_complexity_filters_compose() {
        let mut args = list_args();
        args.category = Some(ProcedureCategory::Surgical);
        args.complexity = Some(ComplexityLevel::VeryHigh);
        let entries = filtered_procedures(&args);
        assert!(entries.iter().any(|e| e.id == "surg-cabg"));
        assert!(entries.iter().all(|e| {
            e.category == ProcedureCategory::Surgical && e.complexity == ComplexityLevel::VeryHigh
        }));
    }

    #[test]
    fn test_specialty_filter_ignores_case() {
        let mut args = list_args();
        args.specialty = Some("NURSING".to_string());
        let entries = filtered_bedside_screening(&args);
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| e.has_specialty("nursing")));
    }

    #[test]
    fn test_body_region_filter_spans_both_stores() {
        let mut args = list_args();
        args.body_region = Some("Chest".to_string());
        let procedures = filtered_procedures(&args);
        let bedside = filtered_bedside_screening(&args);
        assert!(!procedures.is_empty());
        assert!(!bedside.is_empty());
        assert!(procedures.iter().all(|e| e.has_body_region("chest")));
        assert!(bedside.iter().all(|e| e.has_body_region("chest")));
    }

    #[test]
    fn test_unknown_specialty_is_empty_not_error() {
        let mut args = list_args();
        args.specialty = Some("astrology".to_string());
        assert!(filtered_procedures(&args).is_empty());
        assert!(filtered_bedside_screening(&args).is_empty());
    }
}
