//! Markdown mapping report.
//!
//! Lists the image files actually present on disk, then appends a fixed
//! renaming guide. The guide is a static template, deliberately not derived
//! from the scraped data.

use crate::url_model;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const REPORT_HEADER: &str = "# Image Organization Guide

## Downloaded Images
The following images have been downloaded from your website:

";

/// Static renaming suggestions appended after the real file listing.
const RENAME_GUIDE: &str = "

## Recommended Renaming
To integrate with your new website, consider renaming these images to:

### Current Litter (Anzac Day 2024)
- black-white-female-1.jpg
- black-white-female-2.jpg
- black-white-female-3.jpg
- black-white-female-4.jpg
- brown-white-female.jpg
- black-white-male.jpg

### Parent Dogs
- dam-adelaide.jpg (mother)
- sire-windsor.jpg (father)

### Gallery Images
- current-litter-1.jpg through current-litter-6.jpg
- adult-1.jpg through adult-6.jpg
- past-litter-1.jpg through past-litter-6.jpg
- facility-1.jpg through facility-6.jpg

## Next Steps
1. Review the downloaded images
2. Rename the relevant puppy photos to match the names above
3. Refresh your website to see the images appear!
";

/// Names of files in `images_dir` with an accepted image extension,
/// sorted lexicographically.
pub fn list_image_files(images_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let entries = fs::read_dir(images_dir)
        .with_context(|| format!("failed to read images dir {}", images_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if url_model::has_accepted_extension(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Writes (overwrites) the mapping report at `report_path`: the sorted
/// listing of image files in `images_dir` followed by the static renaming
/// guide. Returns the listed filenames.
pub fn write_mapping(images_dir: &Path, report_path: &Path) -> Result<Vec<String>> {
    let names = list_image_files(images_dir)?;

    let mut content = String::from(REPORT_HEADER);
    for name in &names {
        content.push_str("- ");
        content.push_str(name);
        content.push('\n');
    }
    content.push_str(RENAME_GUIDE);

    fs::write(report_path, content)
        .with_context(|| format!("failed to write report {}", report_path.display()))?;
    tracing::info!(report = %report_path.display(), files = names.len(), "mapping report written");
    Ok(names)
}
