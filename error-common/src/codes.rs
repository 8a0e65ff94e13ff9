// Error codes
// Standardized codes surfaced to the (external) API layer

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
}

pub mod triage {
    pub const OUT_OF_RANGE: &str = "TRIAGE_2001";
    pub const NOT_FOUND: &str = "TRIAGE_2002";
}

pub mod evaluation {
    pub const REPORT_IO: &str = "EVAL_3002";
}

pub mod transcription {
    pub const PROVIDER_FAILED: &str = "VOICE_4001";
    pub const AUDIO_REJECTED: &str = "VOICE_4002";
}

pub mod system {
    pub const CONFIG: &str = "SYS_9001";
    pub const INTERNAL: &str = "SYS_9002";
}
