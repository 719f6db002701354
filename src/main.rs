//! Demo editor shell for the block picker sheet.
//!
//! Usage:
//!   blocksheet                 # open the demo window
//!   blocksheet --list          # print the registered catalog as JSON
//!   blocksheet --locale es     # pick the UI locale

#[cfg(feature = "egui")]
use anyhow::{Context as _, Result, anyhow};
#[cfg(feature = "egui")]
use clap::Parser;

#[cfg(feature = "egui")]
use eframe::egui;

#[cfg(feature = "egui")]
use blocksheet::{
    catalog,
    icon::BlockIcon,
    picker::BlockPicker,
    registry::{self, BlockTypeDescriptor},
};

#[cfg(feature = "egui")]
#[derive(Parser, Debug)]
#[command(author, version, about = "Demo editor shell for the blocksheet picker", long_about = None)]
struct Cli {
    /// Print the registered block catalog as JSON and exit
    #[arg(long)]
    list: bool,

    /// UI locale for accessibility labels (en, es, de)
    #[arg(long, default_value = "en")]
    locale: String,
}

#[cfg(feature = "egui")]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    rust_i18n::set_locale(&cli.locale);

    {
        let mut reg = registry::get_block_type_registry()
            .write()
            .map_err(|_| anyhow!("block type registry lock poisoned"))?;
        catalog::install_core_blocks(&mut reg).context("install core blocks")?;
        // A couple of third-party-style registrations exercising the other
        // icon shapes.
        reg.register(BlockTypeDescriptor {
            name: "demo/smiley".to_string(),
            title: "Smiley".to_string(),
            category: "embed".to_string(),
            description: "A block with a named glyph icon".to_string(),
            icon: Some(BlockIcon::glyph("smiley")),
        })?;
        reg.register(BlockTypeDescriptor {
            name: "demo/badge".to_string(),
            title: "Badge".to_string(),
            category: "embed".to_string(),
            description: "A block with a factory icon".to_string(),
            icon: Some(BlockIcon::factory(|ui, paint| {
                let rect = ui.max_rect();
                ui.painter()
                    .circle_filled(rect.center(), paint.size / 2.0, paint.fill);
            })),
        })?;
    }

    if cli.list {
        let reg = registry::get_block_type_registry()
            .read()
            .map_err(|_| anyhow!("block type registry lock poisoned"))?;
        let json =
            serde_json::to_string_pretty(&reg.block_types()).context("serialize block catalog")?;
        println!("{}", json);
        return Ok(());
    }

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "blocksheet demo",
        native_options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DemoApp::default()))
        }),
    )
    .map_err(|e| anyhow!("run demo window: {e}"))?;
    Ok(())
}

#[cfg(feature = "egui")]
#[derive(Default)]
struct DemoApp {
    picker_open: bool,
    is_replacement: bool,
    extra_bottom_padding: bool,
    last_selection: Option<String>,
}

#[cfg(feature = "egui")]
impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("blocksheet demo");
            ui.checkbox(&mut self.is_replacement, "Replace current block");
            ui.checkbox(&mut self.extra_bottom_padding, "Extra bottom padding");
            if let Some(name) = &self.last_selection {
                ui.label(format!("Last inserted: {name}"));
            }
            if ui.button("➕ Add block").clicked() {
                self.picker_open = true;
            }
        });

        if self.picker_open {
            let mut open = true;
            let mut selection: Option<String> = None;
            if let Ok(reg) = registry::get_block_type_registry().read() {
                BlockPicker::new()
                    .is_replacement(self.is_replacement)
                    .add_extra_bottom_padding(self.extra_bottom_padding)
                    .on_value_selected(|name| selection = Some(name.to_string()))
                    .on_dismiss(|| open = false)
                    .show(ctx, &reg);
            }
            if let Some(name) = selection {
                tracing::info!(block = %name, "block selected");
                self.last_selection = Some(name);
                open = false;
            }
            self.picker_open = open;
        }
    }
}

#[cfg(not(feature = "egui"))]
fn main() {
    eprintln!("blocksheet was built without the 'egui' feature; the demo shell needs it.");
}
