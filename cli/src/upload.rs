use crate::context::{block_on, Context};
use crate::error::Result;
use crate::progress::with_spinner;
use crate::ui;
use std::path::Path;
use udc_console::{render, AnalysisSlot, DataSource, RenderMode, RenderedOutput, UploadFile};

pub fn execute(mut ctx: Context, source: DataSource, file: String, preview: bool) -> Result<()> {
    let path = Path::new(&file);

    if preview {
        let view = preview_records(path)?;
        ctx.show(&view);
        return Ok(());
    }

    ui::verbose_message(ctx.verbose, &format!("Uploading {} to {}", path.display(), source));
    let message = format!("Uploading {}", path.display());
    let outcome = block_on(with_spinner(&message, ctx.controller.upload(source, path)))?;
    ctx.finish(outcome)
}

/// Parse a local file the way the service would and render its records
pub fn preview_records(path: &Path) -> Result<RenderedOutput> {
    let file = UploadFile::from_path(path)?;
    let records = file.records()?;
    let count = records.as_array().map_or(0, Vec::len);

    let mut slot = AnalysisSlot::new();
    let mut view = render(Some(&records), None, RenderMode::Tabular, &mut slot);
    view.status = format!("{} records in {}", count, file.file_name);
    Ok(view)
}
