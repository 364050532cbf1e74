// Frame animation for entities

use std::collections::HashMap;

use crate::engine::assets::{FrameHandle, FrameSource};
use crate::game::error::EntityError;

/// A non-empty, ordered run of frames
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    frames: Vec<FrameHandle>,
}

impl Clip {
    /// Returns `None` for an empty frame list
    pub fn new(frames: Vec<FrameHandle>) -> Option<Self> {
        if frames.is_empty() {
            None
        } else {
            Some(Self { frames })
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Frame for a fractional index (truncated, clamped to the last frame)
    pub fn frame(&self, index: f32) -> FrameHandle {
        let i = (index.max(0.0) as usize).min(self.frames.len() - 1);
        self.frames[i]
    }
}

/// All animations of one entity, keyed by status
#[derive(Debug, Clone)]
pub struct AnimationSet {
    owner: String,
    clips: HashMap<String, Clip>,
}

impl AnimationSet {
    pub fn new(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            clips: HashMap::new(),
        }
    }

    /// Load `<folder>/<status>` for every status from a frame source
    pub fn load<I, S>(
        source: &dyn FrameSource,
        owner: &str,
        folder: &str,
        statuses: I,
    ) -> Result<Self, EntityError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(owner);
        for status in statuses {
            let status = status.as_ref();
            let frames = source.frames(&format!("{}/{}", folder, status));
            set.insert(status, frames)?;
        }
        log::debug!("Loaded {} animations for {}", set.clips.len(), owner);
        Ok(set)
    }

    /// Add the frames for one status
    pub fn insert(&mut self, status: &str, frames: Vec<FrameHandle>) -> Result<(), EntityError> {
        let clip = Clip::new(frames).ok_or_else(|| EntityError::EmptyAnimation {
            owner: self.owner.clone(),
            status: status.to_string(),
        })?;
        self.clips.insert(status.to_string(), clip);
        Ok(())
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The clip for a status; a missing one is a content bug
    pub fn clip(&self, status: &str) -> Result<&Clip, EntityError> {
        self.clips
            .get(status)
            .ok_or_else(|| EntityError::MissingAnimation {
                owner: self.owner.clone(),
                status: status.to_string(),
            })
    }

    /// Fail unless every status has a clip
    pub fn require<I, S>(&self, statuses: I) -> Result<(), EntityError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for status in statuses {
            self.clip(status.as_ref())?;
        }
        Ok(())
    }
}

/// Fractional frame cursor
#[derive(Debug, Clone)]
pub struct Animator {
    frame_index: f32,
    speed: f32,
}

impl Animator {
    /// `speed` is frames advanced per tick
    pub fn new(speed: f32) -> Self {
        Self {
            frame_index: 0.0,
            speed,
        }
    }

    pub fn frame_index(&self) -> f32 {
        self.frame_index
    }

    /// Advance and wrap modulo the clip length
    pub fn advance_looping(&mut self, clip: &Clip) -> FrameHandle {
        self.frame_index = (self.frame_index + self.speed) % clip.len() as f32;
        clip.frame(self.frame_index)
    }

    /// Advance, dropping back to the first frame once the clip runs out.
    /// The flag reports that a full cycle completed on this tick.
    pub fn advance_cycle(&mut self, clip: &Clip) -> (FrameHandle, bool) {
        self.frame_index += self.speed;
        let completed = self.frame_index >= clip.len() as f32;
        if completed {
            self.frame_index = 0.0;
        }
        (clip.frame(self.frame_index), completed)
    }
}
