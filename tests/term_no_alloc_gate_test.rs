use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use bonk_arena::core::{World, WorldConfig};
use bonk_arena::term::{FrameBuffer, GameView, HostStatus, Viewport};
use bonk_arena::types::{InputFrame, FRAME_MS};
use glam::Vec2;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn term_game_view_render_is_allocation_free_after_warmup() {
    let mut view = GameView::default();
    let viewport = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut world = World::new(WorldConfig::default());
    let origin = world.player().pos;
    world.spawn_loot(origin + Vec2::new(60.0, 0.0), 0.0);
    let _ = world.tick(0.016, 16.0, &InputFrame::idle().with_attack());

    // Warm-up (canvas sizing).
    view.render_into(&world, 16.0, viewport, &mut fb);

    let paused = HostStatus { paused: true };
    let allocs = with_alloc_counting(|| {
        for f in 0..200u32 {
            let now = 16.0 + f as f64 * FRAME_MS as f64;
            if f % 2 == 0 {
                view.render_into(&world, now, viewport, &mut fb);
            } else {
                view.render_into_with_status(&world, now, &paused, viewport, &mut fb);
            }
        }
    });

    assert!(allocs == 0);
}
