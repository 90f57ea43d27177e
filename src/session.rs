//! One editing run: load, select, transform, save

use crate::config::ToolConfig;
use crate::error::Result;
use crate::gateway::{DocumentGateway, ProcessInspector, SaveMode};
use crate::selection::Selector;
use crate::transform::{Operation, TransformReport};

/// Run `operations` in order over the configured document and save it
///
/// Paths, parsing and selection are all resolved before the first
/// operation runs. Operations are validated up front, so a bad parameter
/// never leaves a half-edited file behind.
pub fn run(
    config: &ToolConfig,
    operations: &[Operation],
    gateway: &dyn DocumentGateway,
    inspector: &dyn ProcessInspector,
) -> Result<Vec<TransformReport>> {
    for operation in operations {
        operation.validate()?;
    }

    let paths = config.resolve_paths(inspector)?;
    let mut song = gateway.load(&paths.input)?;
    let selector = Selector::resolve(&song, &config.selection);

    let reports = operations
        .iter()
        .map(|operation| operation.apply(&mut song, &selector))
        .collect::<Result<Vec<_>>>()?;

    gateway.save(&song, &paths.output, SaveMode::for_song(&song))?;
    Ok(reports)
}
