use bitflags::bitflags;

bitflags! {
  /// Editor hide flags, using the host's bit values.
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
  pub struct HideFlags: u32 {
    const HIDE_IN_HIERARCHY = 1;
    const HIDE_IN_INSPECTOR = 2;
    const DONT_SAVE_IN_EDITOR = 4;
    const NOT_EDITABLE = 8;
    const DONT_SAVE_IN_BUILD = 16;
    const DONT_UNLOAD_UNUSED_ASSET = 32;
    const DONT_SAVE = Self::DONT_SAVE_IN_EDITOR.bits()
      | Self::DONT_SAVE_IN_BUILD.bits()
      | Self::DONT_UNLOAD_UNUSED_ASSET.bits();
    const HIDE_AND_DONT_SAVE = Self::HIDE_IN_HIERARCHY.bits()
      | Self::NOT_EDITABLE.bits()
      | Self::DONT_SAVE.bits();
  }
}

impl HideFlags {
  /// Whether the flags mark an engine-internal object that must not be
  /// treated as scene content.
  ///
  /// Any object carrying `NOT_EDITABLE` counts, which also covers
  /// `HIDE_AND_DONT_SAVE`. The bit is tested on its own rather than comparing
  /// the whole value, so `NOT_EDITABLE | HIDE_IN_HIERARCHY` is internal too.
  pub fn is_internal(self) -> bool {
    self.contains(Self::NOT_EDITABLE)
  }
}
