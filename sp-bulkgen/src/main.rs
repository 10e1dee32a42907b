// reset; cargo run -- --excel-file ./data/survey.xlsx --country "C US"
// reset; cargo run -- --excel-file ./data/survey.xlsx --country k-eu --sheet-name Sheet2 --csv

use std::path::Path;

use bulkgen_lib::{
    csv_output_filename, extract_categories, generate, output_filename, write_template_csv,
    write_template_xlsx, Market, Survey, ERRORS_LOG_FILE,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "sp-bulkgen")]
#[command(about = "Generate SP bulk-upload templates from marketing-survey spreadsheets")]
#[command(version)]
struct Args {
    /// Path to the survey Excel file
    #[arg(short, long)]
    excel_file: String,

    /// Target market: "C US", "B US" or "K EU" (codes c-us/b-us/k-eu also work)
    #[arg(short, long)]
    country: String,

    /// Optional sheet name (if not specified, the first sheet is used)
    #[arg(long)]
    sheet_name: Option<String>,

    /// Directory the generated template is written to
    #[arg(long, default_value = ".")]
    output_dir: String,

    /// Additionally write the template as CSV for quick inspection
    #[arg(long)]
    csv: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let arguments = Args::parse();

    let market = match Market::from_code(&arguments.country) {
        Some(market) => market,
        None => {
            let supported: Vec<&str> = Market::all().iter().map(|m| m.label()).collect();
            eprintln!(
                "❌ Unknown country '{}'. Supported: {}",
                arguments.country,
                supported.join(", ")
            );
            std::process::exit(2);
        }
    };

    let survey = match Survey::from_path(&arguments.excel_file, arguments.sheet_name.as_deref()) {
        Ok(survey) => survey,
        Err(e) => {
            eprintln!("❌ Failed to read the survey file: {e}");
            std::process::exit(1);
        }
    };

    let (data_rows, columns) = survey.shape();
    println!("Read survey: {data_rows} data rows, {columns} columns");
    let campaigns = survey.campaigns();
    println!("Campaigns ({}): {:?}", campaigns.len(), campaigns);
    let categories: Vec<String> = extract_categories(survey.headers()).into_iter().collect();
    println!("Keyword categories: {:?}", categories);

    let template = match generate(market, &survey) {
        Ok(template) => template,
        Err(e) => {
            eprintln!("❌ Generation aborted: {e}");
            eprintln!("❌ Check {} for details.", ERRORS_LOG_FILE);
            std::process::exit(1);
        }
    };

    for warning in &template.warnings {
        println!("⚠️  {warning}");
    }

    let output_dir = Path::new(&arguments.output_dir);
    let xlsx_path = output_dir.join(output_filename(market));
    match write_template_xlsx(&template.rows, &xlsx_path.to_string_lossy()) {
        Ok(_) => {
            println!(
                "✅ Template for {} written: {} ({} rows)",
                market.label(),
                xlsx_path.display(),
                template.row_count()
            );
        }
        Err(e) => {
            eprintln!("❌ Failed to write the template: {e}");
            std::process::exit(1);
        }
    }

    if arguments.csv {
        let csv_path = output_dir.join(csv_output_filename(market));
        match write_template_csv(&template.rows, &csv_path.to_string_lossy()) {
            Ok(_) => println!("✅ CSV preview written: {}", csv_path.display()),
            Err(e) => {
                eprintln!("❌ Failed to write the CSV preview: {e}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
