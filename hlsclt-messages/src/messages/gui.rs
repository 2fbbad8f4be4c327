//! Vendor GUI launch messages

pub struct GuiMessages {
    pub launched: &'static str,
    pub launch_failed: &'static str,
}

pub const GUI_MESSAGES: GuiMessages = GuiMessages {
    launched: "Opening {project} in {executable} (pid {pid})",
    launch_failed: "Failed to launch {executable}: {error}",
};
