use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mnotes", about = "Mini notebook imposition CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the page layout of every sheet (or one sheet)
    Plan {
        #[command(flatten)]
        notebook: NotebookArgs,

        /// Only show this sheet (1-based)
        #[arg(long)]
        sheet: Option<u32>,
    },

    /// Show imposition statistics
    Stats {
        #[command(flatten)]
        notebook: NotebookArgs,
    },

    /// Show one sheet with printing instructions
    Preview {
        #[command(flatten)]
        notebook: NotebookArgs,

        /// Sheet to preview (1-based)
        #[arg(long, default_value = "1")]
        sheet: u32,
    },

    /// Write the imposition plan as a JSON manifest for a renderer
    Export {
        #[command(flatten)]
        notebook: NotebookArgs,

        /// Output manifest file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write the default notebook options to a JSON file
    InitConfig {
        /// Output options file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct NotebookArgs {
    /// Notebook options JSON file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of logical pages
    #[arg(short, long)]
    pages: Option<u32>,

    /// Binding edge
    #[arg(long, value_enum)]
    binding: Option<BindingArg>,

    /// Page-number placement rule
    #[arg(long, value_enum)]
    placement: Option<PlacementArg>,

    /// Page ruling
    #[arg(long, value_enum)]
    page_type: Option<PageTypeArg>,

    /// Do not print page numbers
    #[arg(long)]
    no_page_numbers: bool,

    /// Horizontal print offset in mm (positive moves right)
    #[arg(long, allow_hyphen_values = true)]
    offset_x: Option<f32>,

    /// Vertical print offset in mm (positive moves down)
    #[arg(long, allow_hyphen_values = true)]
    offset_y: Option<f32>,

    /// Accept page counts outside the 10-200 range of the settings form
    #[arg(long)]
    no_clamp: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum BindingArg {
    Left,
    Right,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlacementArg {
    Parity,
    SlotPosition,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageTypeArg {
    Blank,
    Grid,
    Ruled,
}

impl From<BindingArg> for notes_impose::BindingDirection {
    fn from(arg: BindingArg) -> Self {
        match arg {
            BindingArg::Left => Self::Left,
            BindingArg::Right => Self::Right,
        }
    }
}

impl From<PlacementArg> for notes_impose::PlacementStrategy {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Parity => Self::Parity,
            PlacementArg::SlotPosition => Self::SlotPosition,
        }
    }
}

impl From<PageTypeArg> for notes_impose::PageType {
    fn from(arg: PageTypeArg) -> Self {
        match arg {
            PageTypeArg::Blank => Self::Blank,
            PageTypeArg::Grid => Self::Grid,
            PageTypeArg::Ruled => Self::Ruled,
        }
    }
}

impl NotebookArgs {
    /// Build options from the config file (if any) and the flags
    async fn into_options(self) -> Result<notes_impose::NotebookOptions> {
        let mut options = match &self.config {
            Some(path) => {
                log::info!("Loading options from {}", path.display());
                notes_impose::NotebookOptions::load(path).await?
            }
            None => notes_impose::NotebookOptions::default(),
        };

        if let Some(pages) = self.pages {
            options.page_count = pages;
        }
        if let Some(binding) = self.binding {
            options.binding_direction = binding.into();
        }
        if let Some(placement) = self.placement {
            options.placement_strategy = placement.into();
        }
        if let Some(page_type) = self.page_type {
            options.page_type = page_type.into();
        }
        if self.no_page_numbers {
            options.show_page_numbers = false;
        }
        if let Some(x) = self.offset_x {
            options.print_adjustment.horizontal_offset_mm = x;
        }
        if let Some(y) = self.offset_y {
            options.print_adjustment.vertical_offset_mm = y;
        }

        if !self.no_clamp
            && let Some(previous) = options.clamp_page_count_to_ui_range()
        {
            log::warn!(
                "Page count {} is outside {}-{}; using {}",
                previous,
                notes_impose::UI_MIN_PAGE_COUNT,
                notes_impose::UI_MAX_PAGE_COUNT,
                options.page_count
            );
        }

        options.validate()?;
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { notebook, sheet } => {
            let options = notebook.into_options().await?;
            let sheets: Vec<(u32, notes_impose::SheetSlots)> = match sheet {
                Some(index) => vec![(
                    index,
                    notes_impose::plan_sheet(
                        index,
                        options.page_count,
                        options.binding_direction,
                    )?,
                )],
                None => (1..)
                    .zip(notes_impose::plan_all(
                        options.page_count,
                        options.binding_direction,
                    )?)
                    .collect(),
            };

            let total = notes_impose::sheet_count(options.page_count);
            for (index, slots) in sheets {
                println!("Sheet {}/{}", index, total);
                print!("{}", notes_impose::render_ascii(&slots));
            }
        }

        Commands::Stats { notebook } => {
            let options = notebook.into_options().await?;
            let stats = notes_impose::calculate_statistics(&options)?;
            println!("Imposition Statistics:");
            println!("  Logical pages: {}", stats.logical_pages);
            println!("  Output sheets: {}", stats.output_sheets);
            println!("  Slots: {}", stats.slots);
            println!("  Empty slots: {}", stats.empty_slots);
            println!("  Output pages: {}", stats.output_pages);
        }

        Commands::Preview { notebook, sheet } => {
            let options = notebook.into_options().await?;
            let preview = notes_impose::generate_preview(&options, sheet)?;
            println!(
                "{} sheet {} / {}",
                options.output_paper_size.label(),
                preview.sheet,
                preview.total_sheets
            );
            println!(
                "Pages {}-{} / {}",
                preview.first_page, preview.last_page, preview.total_pages
            );
            print!("{}", preview.diagram);
            println!("Printing:");
            for (step, instruction) in preview.instructions.iter().enumerate() {
                println!("  {}. {}", step + 1, instruction);
            }
        }

        Commands::Export { notebook, output } => {
            let options = notebook.into_options().await?;
            let plan = notes_impose::impose(&options)?;
            notes_impose::save_manifest(&plan, &output).await?;
            println!(
                "Imposed {} pages onto {} sheets → {}",
                plan.page_count,
                plan.sheet_count(),
                output.display()
            );
        }

        Commands::InitConfig { output } => {
            notes_impose::NotebookOptions::default()
                .save(&output)
                .await?;
            println!("Default options → {}", output.display());
        }
    }

    Ok(())
}
