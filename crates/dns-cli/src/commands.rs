use anyhow::{Context, Result};
use comfy_table::Table;

use dns_cli::pipeline;
use dns_cli::types::{ExtractRequest, ExtractResult};
use dns_model::Taxonomy;
use dns_standards::load_taxonomy;

use crate::cli::{ExtractArgs, TaxonomyArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_extract(args: &ExtractArgs) -> Result<ExtractResult> {
    let request = ExtractRequest {
        input: args.input.clone(),
        taxonomy: args.taxonomy.clone(),
        class: args.class.clone(),
        subclass: args.subclass.clone(),
        out: args.out.clone(),
        infer_response_from_rcode: args.infer_response_from_rcode,
        schema_config: args.schema_config.clone(),
    };
    pipeline::run_extract(&request)
}

pub fn run_taxonomy(args: &TaxonomyArgs) -> Result<()> {
    let taxonomy = load_taxonomy(&args.taxonomy).context("load taxonomy")?;
    println!("{}", taxonomy_table(&taxonomy));
    Ok(())
}

fn taxonomy_table(taxonomy: &Taxonomy) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Class"),
        header_cell("Subclasses"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    for (class, subclasses) in taxonomy.iter() {
        let listed = subclasses
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            class.to_string(),
            listed,
            subclasses.len().to_string(),
        ]);
    }
    table
}
