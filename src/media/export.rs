// SPDX-License-Identifier: MPL-2.0
//! Grid export: composites the nine slot images into one PNG file.
//!
//! The output is a 616×616 white canvas with each cell's image stretched to
//! exactly 200×200 (no aspect-ratio preservation) at
//! `(column × 208, row × 208)`. Cells with an empty URL, or whose image
//! fails to download or decode, stay white. A partial or even fully blank
//! grid is still written.

use crate::application::port::ImageSource;
use crate::domain::gallery::grid::cell_origin;
use crate::domain::gallery::{SlotIndex, CELL_EDGE, GRID_EDGE, SLOT_COUNT};
use crate::error::{Error, Result};
use futures_util::future::join_all;
use image_rs::imageops::{self, FilterType};
use image_rs::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Fixed name of the exported file.
pub const EXPORT_FILENAME: &str = "dog-grid.png";

/// Background fill of the export canvas.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// One decoded image per cell, `None` for cells left blank.
pub type CellImages = [Option<DynamicImage>; SLOT_COUNT];

/// Downloads and decodes every non-empty URL concurrently.
///
/// Empty URLs are skipped without a request. Failures are logged and leave
/// that cell as `None`.
pub async fn load_cells(source: &dyn ImageSource, urls: &[String; SLOT_COUNT]) -> CellImages {
    let loads = urls.iter().enumerate().map(|(index, url)| async move {
        if url.is_empty() {
            return None;
        }
        let bytes = match source.image_bytes(url).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(slot = index, %url, error = %err, "failed to load image for export");
                return None;
            }
        };
        match decode_cell(bytes).await {
            Ok(image) => Some(image),
            Err(err) => {
                tracing::warn!(slot = index, %url, error = %err, "failed to decode image for export");
                None
            }
        }
    });

    let loaded = join_all(loads).await;
    let mut cells: CellImages = std::array::from_fn(|_| None);
    for (cell, image) in cells.iter_mut().zip(loaded) {
        *cell = image;
    }
    cells
}

/// Decodes one downloaded image on the blocking pool.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a supported image.
pub async fn decode_cell(bytes: Vec<u8>) -> Result<DynamicImage> {
    tokio::task::spawn_blocking(move || image_rs::load_from_memory(&bytes))
        .await
        .map_err(|e| Error::Decode(e.to_string()))?
        .map_err(Error::from)
}

/// Draws the cells onto a fresh white canvas.
#[must_use]
pub fn compose_grid(cells: &CellImages) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(GRID_EDGE, GRID_EDGE, BACKGROUND);

    for (index, cell) in SlotIndex::all().zip(cells.iter()) {
        let Some(image) = cell else {
            continue;
        };
        let stretched = imageops::resize(image, CELL_EDGE, CELL_EDGE, FilterType::Triangle);
        let (x, y) = cell_origin(index);
        imageops::overlay(&mut canvas, &stretched, i64::from(x), i64::from(y));
    }

    canvas
}

/// Encodes the composite as PNG.
///
/// # Errors
///
/// Returns an error if the PNG encoder fails.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Writes the encoded grid to `dir/dog-grid.png`, replacing any earlier export.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn write_export(dir: &Path, png: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILENAME);
    std::fs::write(&path, png)?;
    Ok(path)
}

/// Loads, composites, encodes and writes the grid for a URL snapshot.
///
/// # Errors
///
/// Returns an error only if encoding or writing the file fails; individual
/// cell failures are not errors.
pub async fn export_grid(
    source: &dyn ImageSource,
    urls: [String; SLOT_COUNT],
    dir: PathBuf,
) -> Result<PathBuf> {
    let cells = load_cells(source, &urls).await;
    let drawn = cells.iter().filter(|cell| cell.is_some()).count();

    let png = tokio::task::spawn_blocking(move || encode_png(&compose_grid(&cells)))
        .await
        .map_err(|e| Error::Encode(e.to_string()))??;

    let path = write_export(&dir, &png)?;
    tracing::debug!(drawn, path = %path.display(), "grid composited");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::CELL_GAP;
    use crate::test_utils::{solid_png, ScriptedSource};
    use tempfile::tempdir;

    const RED: [u8; 4] = [220, 20, 20, 255];
    const BLUE: [u8; 4] = [20, 20, 220, 255];

    fn urls(list: [&str; 9]) -> [String; 9] {
        list.map(String::from)
    }

    fn center_of(index: usize) -> (u32, u32) {
        let (x, y) = cell_origin(SlotIndex::new(index).unwrap());
        (x + CELL_EDGE / 2, y + CELL_EDGE / 2)
    }

    fn assert_close(actual: Rgba<u8>, expected: [u8; 4]) {
        let near = actual
            .0
            .iter()
            .zip(expected)
            .all(|(a, e)| a.abs_diff(e) <= 2);
        assert!(near, "expected ~{expected:?}, got {:?}", actual.0);
    }

    fn non_background_cells(canvas: &RgbaImage) -> Vec<usize> {
        (0..9)
            .filter(|&i| {
                let (x, y) = center_of(i);
                *canvas.get_pixel(x, y) != BACKGROUND
            })
            .collect()
    }

    #[test]
    fn blank_grid_is_white_and_616_square() {
        let cells: CellImages = std::array::from_fn(|_| None);
        let canvas = compose_grid(&cells);
        assert_eq!(canvas.dimensions(), (616, 616));
        assert!(canvas.pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn images_are_stretched_to_fill_the_cell() {
        // A wide 40×10 source must cover the full 200×200 cell.
        let wide = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 10, Rgba(RED)));
        let mut cells: CellImages = std::array::from_fn(|_| None);
        cells[4] = Some(wide);

        let canvas = compose_grid(&cells);
        let (x0, y0) = cell_origin(SlotIndex::new(4).unwrap());

        let far = CELL_EDGE - 1;
        for (x, y) in [(x0, y0), (x0 + far, y0), (x0, y0 + far), (x0 + far, y0 + far)] {
            assert_close(*canvas.get_pixel(x, y), RED);
        }
        // Gap pixels next to the cell stay white.
        assert_eq!(*canvas.get_pixel(x0 + CELL_EDGE + CELL_GAP / 2, y0 + 10), BACKGROUND);
        assert_eq!(*canvas.get_pixel(x0 + 10, y0 - CELL_GAP / 2), BACKGROUND);
    }

    #[tokio::test]
    async fn empty_urls_are_skipped_without_requests() {
        let source = ScriptedSource::default()
            .with_image("u2", solid_png(8, 8, RED))
            .with_image("u4", solid_png(8, 8, BLUE));

        let cells = load_cells(&source, &urls(["", "u2", "", "u4", "", "", "", "", ""])).await;

        assert_eq!(source.byte_calls(), 2);
        let canvas = compose_grid(&cells);
        assert_eq!(non_background_cells(&canvas), vec![1, 3]);
        let (x, y) = center_of(1);
        assert_close(*canvas.get_pixel(x, y), RED);
        let (x, y) = center_of(3);
        assert_close(*canvas.get_pixel(x, y), BLUE);
    }

    #[tokio::test]
    async fn failed_loads_and_undecodable_bytes_stay_blank() {
        let source = ScriptedSource::default()
            .with_image("good", solid_png(4, 4, BLUE))
            .with_image("garbage", b"not an image".to_vec());

        let cells = load_cells(
            &source,
            &urls(["good", "garbage", "missing", "", "", "", "", "", ""]),
        )
        .await;

        assert!(cells[0].is_some());
        assert!(cells[1].is_none());
        assert!(cells[2].is_none());
        assert_eq!(non_background_cells(&compose_grid(&cells)), vec![0]);
    }

    #[tokio::test]
    async fn decode_cell_reads_images_and_rejects_garbage() {
        let image = decode_cell(solid_png(6, 3, RED)).await.expect("png decodes");
        assert_eq!((image.width(), image.height()), (6, 3));

        assert!(matches!(
            decode_cell(b"not an image".to_vec()).await,
            Err(Error::Decode(_))
        ));
    }

    #[tokio::test]
    async fn export_grid_writes_fixed_filename_even_when_blank() {
        let dir = tempdir().expect("failed to create temp dir");
        let source = ScriptedSource::default();

        let path = export_grid(&source, urls([""; 9]), dir.path().to_path_buf())
            .await
            .expect("blank export still succeeds");

        assert_eq!(path, dir.path().join(EXPORT_FILENAME));
        let written = image_rs::open(&path).expect("export is a readable png");
        assert_eq!((written.width(), written.height()), (GRID_EDGE, GRID_EDGE));
    }

    #[test]
    fn write_export_creates_missing_directories() {
        let dir = tempdir().expect("failed to create temp dir");
        let nested = dir.path().join("a").join("b");
        let png = encode_png(&RgbaImage::from_pixel(2, 2, BACKGROUND)).unwrap();

        let path = write_export(&nested, &png).expect("write succeeds");
        assert!(path.exists());
    }
}
