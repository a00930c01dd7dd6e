//! 应用主入口
//!
//! 定义 `App` 和主运行循环：加载配置、创建窗口与渲染器、
//! 把 winit 事件送入 ECS 输入缓冲区，并按固定时间步推进星空。

use crate::config::{InputConfig, LoggingConfig, RenderConfig, StarfieldConfig};
use crate::diagnostics;
use crate::ecs::{
    create_fixed_schedule, create_update_schedule, setup_resources, ExitRequested, Time, Viewport,
};
use crate::input::PointerState;
use crate::platform::winit::WinitInputTranslator;
use crate::platform::InputBuffer;
use crate::render::{draw_field, WgpuStarRenderer};
use crate::starfield::StarField;
use bevy_ecs::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::window::{Window, WindowBuilder};

use super::error::{RenderResult, StarfieldError, StarfieldResult};

/// 星空应用
///
/// # 示例
///
/// ```no_run
/// use starfield::core::App;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     App::run()?;
///     Ok(())
/// }
/// ```
pub struct App;

/// 事件循环内持有的状态
struct Runtime {
    window: Arc<Window>,
    renderer: WgpuStarRenderer,
    world: World,
    fixed_schedule: Schedule,
    update_schedule: Schedule,
    translator: WinitInputTranslator,
    style: RenderConfig,
    base_title: String,
    last_title: String,
    last_time: Instant,
}

impl App {
    /// 按默认搜索路径加载配置并运行
    pub fn run() -> StarfieldResult<()> {
        let mut config = StarfieldConfig::load_or_default();
        config.apply_env_overrides();
        Self::run_with_config(config)
    }

    pub fn run_with_config(config: StarfieldConfig) -> StarfieldResult<()> {
        Self::initialize_logging(&config.logging);
        config.validate()?;
        tracing::info!(
            target: "starfield",
            "Starting {}x{} @ {} fps, {} + {} stars",
            config.window.width,
            config.window.height,
            config.window.target_fps,
            config.field.base_count,
            config.field.constellation_count
        );

        let (event_loop, window, renderer) = Self::initialize_window_and_renderer(&config)?;
        let world = Self::initialize_world(&config, &window);

        let runtime = Runtime {
            window,
            renderer,
            world,
            fixed_schedule: create_fixed_schedule(),
            update_schedule: create_update_schedule(),
            translator: WinitInputTranslator::new(),
            style: config.render,
            base_title: config.window.title.clone(),
            last_title: String::new(),
            last_time: Instant::now(),
        };

        Self::run_event_loop(event_loop, runtime)
    }

    /// 初始化日志系统
    ///
    /// `RUST_LOG` 优先，未设置时使用配置中的级别。
    fn initialize_logging(logging: &LoggingConfig) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(logging.level.as_filter_str()));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    fn initialize_window_and_renderer(
        config: &StarfieldConfig,
    ) -> StarfieldResult<(EventLoop<()>, Arc<Window>, WgpuStarRenderer)> {
        let event_loop = EventLoop::new().map_err(|e| {
            StarfieldError::EventLoop(format!("Failed to create event loop: {}", e))
        })?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let window = WindowBuilder::new()
            .with_title(config.window.title.as_str())
            .with_inner_size(PhysicalSize::new(config.window.width, config.window.height))
            .build(&event_loop)
            .map_err(|e| StarfieldError::Window(e.to_string()))?;
        let window = Arc::new(window);

        let renderer = pollster::block_on(WgpuStarRenderer::new(
            Arc::clone(&window),
            config.window.background,
            config.window.vsync,
        ))?;

        Ok((event_loop, window, renderer))
    }

    /// 创建 ECS 世界；视口取窗口的实际尺寸
    fn initialize_world(config: &StarfieldConfig, window: &Window) -> World {
        let size = window.inner_size();
        let viewport = Viewport {
            width: size.width.max(1),
            height: size.height.max(1),
        };
        let field = StarField::from_config(config.field_for_window(), viewport.center());
        for line in diagnostics::instruction_lines(&field.stats()) {
            tracing::info!(target: "starfield", "{}", line);
        }

        let mut world = World::new();
        setup_resources(&mut world, config, field);
        world.insert_resource(viewport);
        world
    }

    fn run_event_loop(event_loop: EventLoop<()>, mut runtime: Runtime) -> StarfieldResult<()> {
        let mut failure: Option<StarfieldError> = None;
        let failure_slot = &mut failure;

        event_loop
            .run(move |event, elwt| match event {
                Event::WindowEvent { event, .. } => {
                    if let Err(e) = Self::handle_window_event(&event, &mut runtime) {
                        tracing::error!(target: "render", "Render failed: {}", e);
                        *failure_slot = Some(e.into());
                        elwt.exit();
                    }
                }
                Event::AboutToWait => Self::update(&mut runtime, elwt),
                _ => {}
            })
            .map_err(|e| StarfieldError::EventLoop(format!("Event loop error: {}", e)))?;

        tracing::info!(target: "starfield", "Shutting down");
        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// 处理窗口事件：输入进入缓冲区，重绘请求直接渲染
    fn handle_window_event(event: &WindowEvent, runtime: &mut Runtime) -> RenderResult<()> {
        match event {
            WindowEvent::Resized(size) => runtime.renderer.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                Self::render(&runtime.world, &mut runtime.renderer, &runtime.style)?;
            }
            _ => {}
        }

        if let Some(input) = runtime.translator.translate(event) {
            runtime.world.resource_mut::<InputBuffer>().push(input);
        }
        Ok(())
    }

    /// 更新循环
    fn update(runtime: &mut Runtime, elwt: &EventLoopWindowTarget<()>) {
        let _span = tracing::info_span!(target: "update", "frame").entered();

        let now = Instant::now();
        let delta = now.duration_since(runtime.last_time).as_secs_f64();
        runtime.last_time = now;

        let steps = runtime.world.resource_mut::<Time>().advance(delta);
        for _ in 0..steps {
            runtime.fixed_schedule.run(&mut runtime.world);
        }
        runtime.update_schedule.run(&mut runtime.world);

        if runtime.world.resource::<ExitRequested>().0 {
            elwt.exit();
            return;
        }

        Self::update_title(runtime);
        runtime.window.request_redraw();
    }

    fn update_title(runtime: &mut Runtime) {
        let population = runtime.world.resource::<StarField>().population_count();
        let pointer = runtime.world.resource::<PointerState>().position;
        let viewport = runtime.world.resource::<Viewport>();
        let region = &runtime.world.resource::<InputConfig>().hint_region;
        let show_hint = diagnostics::hint_visible(pointer, viewport, region);

        let title = diagnostics::window_title(&runtime.base_title, population, show_hint);
        if title != runtime.last_title {
            runtime.window.set_title(&title);
            runtime.last_title = title;
        }
    }

    fn render(
        world: &World,
        renderer: &mut WgpuStarRenderer,
        style: &RenderConfig,
    ) -> RenderResult<()> {
        let field = world.resource::<StarField>();
        let viewport = world.resource::<Viewport>();

        renderer.begin_frame();
        let drawn = draw_field(field, renderer, viewport, style);
        tracing::trace!(target: "render", drawn, "Frame recorded");
        renderer.present()
    }
}
