//! Player animation selection
//!
//! A three-state machine (idle / walk / jump) over frame sequences supplied by
//! the host as opaque handles. Missing sequences fall back to a blank frame.

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_SPEED;

/// Which frame sequence is playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimState {
    #[default]
    Idle,
    Walk,
    Jump,
}

impl AnimState {
    /// Asset name prefix for this sequence
    pub fn prefix(&self) -> &'static str {
        match self {
            AnimState::Idle => "idle",
            AnimState::Walk => "walk",
            AnimState::Jump => "jump",
        }
    }
}

/// Opaque handle to a pre-loaded sprite owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId(pub u32);

/// The frame to draw this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame {
    Sprite(FrameId),
    /// Transparent placeholder used when a sequence has no frames
    Blank,
}

/// Frame sequences keyed by animation state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationFrames {
    pub idle: Vec<FrameId>,
    pub walk: Vec<FrameId>,
    pub jump: Vec<FrameId>,
}

impl AnimationFrames {
    pub fn sequence(&self, state: AnimState) -> &[FrameId] {
        match state {
            AnimState::Idle => &self.idle,
            AnimState::Walk => &self.walk,
            AnimState::Jump => &self.jump,
        }
    }

    /// Bucket sprite file names by prefix (`walk*.png`, `jump*.png`, `idle*.png`).
    ///
    /// Names are sorted first; each accepted name's handle is its index in the
    /// sorted list, so the host can load images in the same order.
    pub fn from_named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = names.into_iter().map(|n| n.as_ref().to_owned()).collect();
        names.sort();

        let mut frames = Self::default();
        for (i, name) in names.iter().enumerate() {
            if !name.ends_with(".png") {
                continue;
            }
            let id = FrameId(i as u32);
            if name.starts_with(AnimState::Walk.prefix()) {
                frames.walk.push(id);
            } else if name.starts_with(AnimState::Jump.prefix()) {
                frames.jump.push(id);
            } else if name.starts_with(AnimState::Idle.prefix()) {
                frames.idle.push(id);
            }
        }
        frames
    }
}

/// Animation playback state for the player
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Animator {
    pub state: AnimState,
    pub frame_index: usize,
    pub frame_timer: u32,
}

impl Animator {
    /// Pick the sequence for the current motion, by priority
    pub fn select(grounded: bool, vel_x: f32, frames: &AnimationFrames) -> AnimState {
        if !grounded && !frames.jump.is_empty() {
            AnimState::Jump
        } else if vel_x != 0.0 && !frames.walk.is_empty() {
            AnimState::Walk
        } else {
            AnimState::Idle
        }
    }

    /// Advance one tick and return the frame to draw
    pub fn update(&mut self, grounded: bool, vel_x: f32, frames: &AnimationFrames) -> Frame {
        let next = Self::select(grounded, vel_x, frames);
        if next != self.state {
            self.state = next;
            self.frame_index = 0;
            self.frame_timer = 0;
        }

        let sequence = frames.sequence(self.state);
        let len = sequence.len().max(1);

        self.frame_timer += 1;
        if self.frame_timer >= FRAME_SPEED {
            self.frame_timer = 0;
            self.frame_index = (self.frame_index + 1) % len;
        }

        sequence
            .get(self.frame_index)
            .map_or(Frame::Blank, |&id| Frame::Sprite(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_set() -> AnimationFrames {
        AnimationFrames {
            idle: vec![FrameId(0), FrameId(1)],
            walk: vec![FrameId(10), FrameId(11), FrameId(12)],
            jump: vec![FrameId(20)],
        }
    }

    #[test]
    fn test_priority() {
        let frames = full_set();
        assert_eq!(Animator::select(false, 3.0, &frames), AnimState::Jump);
        assert_eq!(Animator::select(true, -3.0, &frames), AnimState::Walk);
        assert_eq!(Animator::select(true, 0.0, &frames), AnimState::Idle);
    }

    #[test]
    fn test_missing_sequences_fall_through() {
        let frames = AnimationFrames {
            idle: vec![FrameId(0)],
            ..Default::default()
        };
        assert_eq!(Animator::select(false, 3.0, &frames), AnimState::Idle);
        assert_eq!(Animator::select(true, 3.0, &frames), AnimState::Idle);
    }

    #[test]
    fn test_frames_advance_and_wrap() {
        let frames = full_set();
        let mut animator = Animator::default();

        for _ in 0..FRAME_SPEED - 1 {
            assert_eq!(animator.update(true, 3.0, &frames), Frame::Sprite(FrameId(10)));
        }
        assert_eq!(animator.update(true, 3.0, &frames), Frame::Sprite(FrameId(11)));

        for _ in 0..FRAME_SPEED * 2 {
            animator.update(true, 3.0, &frames);
        }
        // Three frames, three full holds: back to the first
        assert_eq!(animator.frame_index, 0);
    }

    #[test]
    fn test_transition_resets_playback() {
        let frames = full_set();
        let mut animator = Animator::default();
        for _ in 0..FRAME_SPEED + 3 {
            animator.update(true, 3.0, &frames);
        }
        assert_eq!(animator.frame_index, 1);
        assert_eq!(animator.frame_timer, 3);

        let frame = animator.update(false, 3.0, &frames);
        assert_eq!(animator.state, AnimState::Jump);
        assert_eq!(animator.frame_index, 0);
        assert_eq!(animator.frame_timer, 1);
        assert_eq!(frame, Frame::Sprite(FrameId(20)));
    }

    #[test]
    fn test_empty_idle_uses_placeholder() {
        let frames = AnimationFrames::default();
        let mut animator = Animator::default();
        for _ in 0..FRAME_SPEED * 3 {
            assert_eq!(animator.update(true, 0.0, &frames), Frame::Blank);
        }
        assert_eq!(animator.frame_index, 0);
    }

    #[test]
    fn test_from_named_sorts_and_buckets() {
        let frames = AnimationFrames::from_named([
            "walk2.png",
            "idle.png",
            "jump1.png",
            "walk1.png",
            "notes.txt",
            "shadow.png",
        ]);
        // sorted: idle.png, jump1.png, notes.txt, shadow.png, walk1.png, walk2.png
        assert_eq!(frames.idle, vec![FrameId(0)]);
        assert_eq!(frames.jump, vec![FrameId(1)]);
        assert_eq!(frames.walk, vec![FrameId(4), FrameId(5)]);
    }
}
