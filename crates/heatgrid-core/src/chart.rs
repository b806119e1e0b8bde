// File: crates/heatgrid-core/src/chart.rs
// Summary: Heat-map chart and headless rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use heatgrid_data::Dataset;
use skia_safe as skia;

use crate::axis::{month_ticks, year_ticks, Tick};
use crate::color::ThresholdScale;
use crate::layout::{Cell, CellGrid};
use crate::legend;
use crate::scale::legend_scale;
use crate::theme::Theme;
use crate::tooltip;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw titles, tick labels, and axis captions.
    pub draw_labels: bool,
    /// Pointer position; a cell under it gets the hover tooltip.
    pub hover: Option<(f32, f32)>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            hover: None,
        }
    }
}

pub struct HeatMap {
    pub dataset: Dataset,
    pub colors: ThresholdScale,
    pub title: String,
    pub subtitle: String,
}

impl HeatMap {
    /// Chart over a dataset with the fixed temperature palette and a
    /// dataset-derived title block.
    pub fn new(dataset: Dataset) -> Self {
        let subtitle = match dataset.year_range() {
            Some((min, max)) => format!(
                "{} - {}: base temperature {}\u{2103}",
                min, max, dataset.base_temperature
            ),
            None => format!("base temperature {}\u{2103}", dataset.base_temperature),
        };
        Self {
            dataset,
            colors: ThresholdScale::temperature(),
            title: "Monthly Global Land-Surface Temperature".to_string(),
            subtitle,
        }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw_scene(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and read back raw RGBA8 pixels: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw_scene(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn draw_scene(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let grid = CellGrid::layout(&self.dataset, opts.width, opts.height, &opts.insets);

        draw_cells(canvas, &grid, &self.colors);
        draw_x_axis(canvas, &grid, opts);
        draw_y_axis(canvas, &grid, opts);
        draw_legend(canvas, &self.colors, opts);
        if opts.draw_labels {
            draw_titles(canvas, &self.title, &self.subtitle, opts);
        }

        if let Some((hx, hy)) = opts.hover {
            if let Some(cell) = grid.hit_test(hx, hy) {
                draw_tooltip(canvas, cell, &self.colors, hx, hy, opts);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = fill_paint(color);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn font(size: f32) -> skia::Font {
    let mut f = skia::Font::default();
    f.set_size(size);
    f
}

fn draw_str_centered(
    canvas: &skia::Canvas,
    text: &str,
    cx: f32,
    y: f32,
    font: &skia::Font,
    paint: &skia::Paint,
) {
    let (w, _) = font.measure_str(text, Some(paint));
    canvas.draw_str(text, (cx - w / 2.0, y), font, paint);
}

fn draw_cells(canvas: &skia::Canvas, grid: &CellGrid, colors: &ThresholdScale) {
    let mut paint = skia::Paint::default();
    for cell in &grid.cells {
        paint.set_color(colors.color_for(cell.temperature).to_skia());
        let rect = skia::Rect::from_xywh(cell.x, cell.y, cell.width, cell.height);
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_titles(canvas: &skia::Canvas, title: &str, subtitle: &str, opts: &RenderOptions) {
    let w = opts.width as f32;
    let top = opts.insets.top as f32;

    let title_font = font(18.0);
    let title_paint = fill_paint(opts.theme.title);
    draw_str_centered(canvas, title, w / 2.0, top / 2.0, &title_font, &title_paint);

    let sub_font = font(13.0);
    let sub_paint = fill_paint(opts.theme.subtitle);
    draw_str_centered(canvas, subtitle, w / 2.0, top / 2.0 + 20.0, &sub_font, &sub_paint);
}

fn draw_x_axis(canvas: &skia::Canvas, grid: &CellGrid, opts: &RenderOptions) {
    let theme = &opts.theme;
    let left = opts.insets.left as f32;
    let right = (opts.width - opts.insets.right as i32) as f32;
    let bottom = (opts.height - opts.insets.bottom as i32) as f32;

    let axis = stroke_paint(theme.axis_line, 1.5);
    canvas.draw_line((left, bottom), (right, bottom), &axis);

    let tick_paint = stroke_paint(theme.tick, 1.0);
    let label_font = font(11.0);
    let label_paint = fill_paint(theme.tick_label);
    for Tick { value, label } in
        year_ticks(grid.x_scale.domain_start, grid.x_scale.domain_end)
    {
        let x = grid.x_scale.to_px(value);
        canvas.draw_line((x, bottom), (x, bottom + 6.0), &tick_paint);
        if opts.draw_labels {
            draw_str_centered(canvas, &label, x, bottom + 20.0, &label_font, &label_paint);
        }
    }

    if opts.draw_labels {
        let caption_font = font(13.0);
        let caption_paint = fill_paint(theme.axis_label);
        let y = opts.height as f32 - opts.insets.bottom as f32 / 2.5;
        draw_str_centered(canvas, "Year", opts.width as f32 / 2.0, y, &caption_font, &caption_paint);
    }
}

fn draw_y_axis(canvas: &skia::Canvas, grid: &CellGrid, opts: &RenderOptions) {
    let theme = &opts.theme;
    let left = opts.insets.left as f32;
    let top = opts.insets.top as f32;
    let bottom = (opts.height - opts.insets.bottom as i32) as f32;

    let axis = stroke_paint(theme.axis_line, 1.5);
    canvas.draw_line((left, top), (left, bottom), &axis);

    let tick_paint = stroke_paint(theme.tick, 1.0);
    let label_font = font(11.0);
    let label_paint = fill_paint(theme.tick_label);
    for Tick { value, label } in month_ticks() {
        let y = grid.y_scale.to_px(value);
        canvas.draw_line((left - 6.0, y), (left, y), &tick_paint);
        if opts.draw_labels {
            let (w, _) = label_font.measure_str(&label, Some(&label_paint));
            canvas.draw_str(&label, (left - 10.0 - w, y + 4.0), &label_font, &label_paint);
        }
    }

    if opts.draw_labels {
        let caption_font = font(13.0);
        let caption_paint = fill_paint(theme.axis_label);
        canvas.save();
        canvas.translate((left / 2.0 - 10.0, opts.height as f32 / 2.0));
        canvas.rotate(-90.0, None);
        draw_str_centered(canvas, "Month", 0.0, 0.0, &caption_font, &caption_paint);
        canvas.restore();
    }
}

fn draw_legend(canvas: &skia::Canvas, colors: &ThresholdScale, opts: &RenderOptions) {
    const STRIP_HEIGHT: f32 = 15.0;
    const TICK_LENGTH: f32 = 20.0;

    let scale = legend_scale(opts.width);
    let origin_x = opts.width as f32 / 12.0;
    let origin_y = opts.height as f32 - opts.insets.bottom as f32 / 1.7;

    let mut paint = skia::Paint::default();
    for seg in legend::segments(colors, &scale) {
        paint.set_color(seg.color.to_skia());
        let rect = skia::Rect::from_xywh(origin_x + seg.x, origin_y, seg.width, STRIP_HEIGHT);
        canvas.draw_rect(rect, &paint);
    }

    let tick_paint = stroke_paint(opts.theme.tick, 1.0);
    let label_font = font(10.0);
    let label_paint = fill_paint(opts.theme.tick_label);
    for Tick { value, label } in legend::ticks(colors) {
        let x = origin_x + scale.to_px(value);
        canvas.draw_line((x, origin_y), (x, origin_y + TICK_LENGTH), &tick_paint);
        if opts.draw_labels {
            draw_str_centered(canvas, &label, x, origin_y + TICK_LENGTH + 11.0, &label_font, &label_paint);
        }
    }
}

fn draw_tooltip(
    canvas: &skia::Canvas,
    cell: &Cell,
    colors: &ThresholdScale,
    px: f32,
    py: f32,
    opts: &RenderOptions,
) {
    const PAD: f32 = 8.0;
    const LINE_HEIGHT: f32 = 16.0;

    let lines = tooltip::lines(cell);
    let text_font = font(12.0);
    let text_paint = fill_paint(opts.theme.tooltip_text);

    let mut text_width: f32 = 0.0;
    for line in &lines {
        let (w, _) = text_font.measure_str(line, Some(&text_paint));
        text_width = text_width.max(w);
    }
    let box_w = text_width + PAD * 2.0;
    let box_h = LINE_HEIGHT * lines.len() as f32 + PAD;

    // Below-right of the pointer, clamped onto the surface.
    let x = px.min(opts.width as f32 - box_w).max(0.0);
    let y = (py + tooltip::POINTER_OFFSET_Y).min(opts.height as f32 - box_h).max(0.0);

    let bg = fill_paint(colors.color_for(cell.temperature).to_skia());
    let rect = skia::Rect::from_xywh(x, y, box_w, box_h);
    canvas.draw_round_rect(rect, 4.0, 4.0, &bg);

    for (i, line) in lines.iter().enumerate() {
        let baseline = y + PAD + LINE_HEIGHT * (i as f32 + 0.6);
        canvas.draw_str(line.as_str(), (x + PAD, baseline), &text_font, &text_paint);
    }
}
