// File: crates/window-demo/src/main.rs
// Summary: Minimal windowed viewer that renders the heat map via RGBA blit (CPU)
// using winit + softbuffer, with the hover tooltip following the cursor.

use heatgrid_core::{HeatMap, RenderOptions};
use heatgrid_data::{fetch_dataset, DATASET_URL};
use std::num::NonZeroU32;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() {
    // Arg: dataset URL (defaults to the published endpoint)
    let url = std::env::args().nth(1).unwrap_or_else(|| DATASET_URL.to_string());

    // One awaited fetch before any rendering begins
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let dataset = match runtime.block_on(fetch_dataset(&url)) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("failed to load dataset: {e}");
            return;
        }
    };
    if dataset.is_empty() {
        eprintln!("dataset has no observations");
        return;
    }

    let chart = HeatMap::new(dataset);

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Heatgrid — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(900.0, 500.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut size = window.inner_size();
    let mut hover: Option<(f32, f32)> = None;

    let mut draw = move |chart: &HeatMap, size: winit::dpi::PhysicalSize<u32>, hover: Option<(f32, f32)>| {
        let w = size.width.max(1);
        let h = size.height.max(1);
        surface.resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap()).ok();

        let mut opts = RenderOptions::default();
        opts.width = w as i32;
        opts.height = h as i32;
        opts.hover = hover;

        // Render to RGBA and convert to packed ARGB for softbuffer
        let (rgba, _, _, _) = chart.render_to_rgba8(&opts).expect("render rgba");
        let mut frame = surface.buffer_mut().expect("frame");
        let max_px = frame.len().min(rgba.len() / 4);
        for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
            let r = px[0] as u32;
            let g = px[1] as u32;
            let b = px[2] as u32;
            let a = px[3] as u32;
            frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
        }
        if let Err(e) = frame.present() {
            eprintln!("present error: {e:?}");
        }
    };

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    hover = Some((position.x as f32, position.y as f32));
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    hover = None;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => draw(&chart, size, hover),
            _ => {}
        }
    });
}
