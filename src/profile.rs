use tracing::info;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Profile {
    pub camera_rays: usize, // all primary rays traced
    pub hits: usize,        // rays that found a sphere
    pub misses: usize,      // rays that fell through to the background
    pub errors: usize,      // rays aborted by degenerate geometry
}

impl Profile {
    pub fn new(camera_rays: usize, hits: usize, misses: usize, errors: usize) -> Self {
        Profile {
            camera_rays,
            hits,
            misses,
            errors,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.hits + other.hits,
            self.misses + other.misses,
            self.errors + other.errors,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            hits,
            misses,
            errors,
        } = self;
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / (threads as f32)
        );
        info!("{} hits, {} misses", hits, misses);
        if errors > 0 {
            info!("{} rays failed on degenerate geometry", errors);
        }
    }
}
