#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

mod cli;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use dashboard_ui::chart::{build_chart, ChartInput, ChartKind};
use dashboard_ui::keymap::{load_default_keymap, Keymap};
use dashboard_ui::messages::{Msg, PageMsg};
use dashboard_ui::{update, AppConfig, DashboardModel, HeadlessHost};

use cli::{CliArgs, Task};

fn main() -> Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    let run = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    dashboard_ui::tracing::init(run.file_logging);

    let config = AppConfig::load(run.config_path.as_deref());
    let keymap_path = run.keymap_path.clone().or_else(|| config.keymap_path());
    let keymap = Keymap::with_bindings(load_default_keymap(keymap_path.as_deref()));

    match run.task {
        Task::Bind {
            page,
            regions,
            print_values,
        } => bind_page(&page, &regions, print_values, config, keymap),
        Task::Chart {
            page,
            canvas,
            kind,
            small_screen,
        } => print_chart(&page, &canvas, kind, small_screen, &config),
        Task::Keymap => {
            for binding in keymap.bindings() {
                println!("{:<16} {}", binding.display_string(), binding.command);
            }
            Ok(())
        }
    }
}

fn read_page(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn bind_page(
    page: &Path,
    regions: &[String],
    print_values: bool,
    config: AppConfig,
    keymap: Keymap,
) -> Result<()> {
    let html = read_page(page)?;
    let mut model = DashboardModel::from_html(&html, config, keymap);
    let mut host = HeadlessHost::default();

    update(&mut model, Msg::Page(PageMsg::Loaded), &mut host);
    for id in regions {
        let region = model
            .document
            .by_id(id)
            .ok_or_else(|| anyhow!("No element with id '{}' in {}", id, page.display()))?;
        update(&mut model, Msg::Page(PageMsg::RegionShown(region)), &mut host);
    }

    tracing::info!("Bound {} field(s) in {}", model.binder.len(), page.display());

    if print_values {
        for binding in model.binder.bindings() {
            let doc = &model.document;
            let name = doc
                .attr(binding.source_field, "name")
                .or_else(|| doc.attr(binding.source_field, "id"))
                .unwrap_or("?");
            println!("{}={}", name, doc.value(binding.source_field).unwrap_or(""));
        }
    } else {
        println!("{}", model.html());
    }
    Ok(())
}

fn print_chart(
    page: &Path,
    canvas: &str,
    kind: ChartKind,
    small_screen: bool,
    config: &AppConfig,
) -> Result<()> {
    let html = read_page(page)?;
    let doc = dashboard_ui::Document::parse(&html);
    let chart = build_chart(
        &doc,
        canvas,
        kind,
        ChartInput::default(),
        small_screen,
        &config.chart.palette,
    )?;
    println!("{}", chart.to_json()?);
    Ok(())
}
