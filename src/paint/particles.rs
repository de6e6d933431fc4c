use rand::Rng;

// Constants for the particle buffer
pub const PARTICLE_COUNT: usize = 2048;
pub const PARTICLE_ALIGNMENT: usize = 0x4000;
pub const PARTICLE_SEED_BOUND: i32 = 9999;

// Page-aligned backing block for the particle seeds
#[repr(C, align(16384))]
struct ParticleCells {
    cells: [i32; PARTICLE_COUNT],
}

const _: () = assert!(std::mem::align_of::<ParticleCells>() == PARTICLE_ALIGNMENT);

/// Fixed-size block of per-particle noise seeds read by the paint kernel.
///
/// Seeds are drawn once and never touched again on the host; the kernel
/// uses them as jitter, not as simulated state.
pub struct ParticleStore {
    block: Box<ParticleCells>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    /// Seeds every cell independently from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut block = Box::new(ParticleCells {
            cells: [0; PARTICLE_COUNT],
        });
        for cell in block.cells.iter_mut() {
            *cell = rng.gen_range(0..PARTICLE_SEED_BOUND);
        }

        Self { block }
    }

    pub fn cells(&self) -> &[i32] {
        &self.block.cells
    }

    pub fn len(&self) -> usize {
        self.block.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.block.cells.is_empty()
    }

    /// Raw bytes for the one-time GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.block.cells)
    }
}

impl Default for ParticleStore {
    fn default() -> Self {
        Self::new()
    }
}
