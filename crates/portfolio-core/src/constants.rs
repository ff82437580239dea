// Shared tuning constants for the portfolio behaviour layer.

// Scroll spy
pub const HEADER_OFFSET_PX: f64 = 100.0; // compensates for the sticky nav bar
pub const SECTION_IDS: [&str; 7] = [
    "hero",
    "about",
    "skills",
    "projects",
    "experience",
    "education",
    "contact",
];
pub const NAV_LABELS: [&str; 6] = [
    "About",
    "Skills",
    "Projects",
    "Experience",
    "Education",
    "Contact",
];

// Particle field
pub const DEFAULT_PARTICLE_COUNT: usize = 50;
pub const HERO_PARTICLE_COUNT: usize = 30;
pub const PARTICLE_POSITION_MAX_PCT: f32 = 100.0;
pub const PARTICLE_DELAY_MAX_SEC: f32 = 15.0;
pub const PARTICLE_DURATION_MIN_SEC: f32 = 15.0;
pub const PARTICLE_DURATION_SPAN_SEC: f32 = 10.0;

// Scroll progress spring
pub const PROGRESS_STIFFNESS: f32 = 100.0;
pub const PROGRESS_DAMPING: f32 = 30.0;
pub const PROGRESS_MASS: f32 = 1.0;
pub const PROGRESS_REST_DELTA: f32 = 0.001;
pub const PROGRESS_REST_SPEED: f32 = 0.001;
pub const SPRING_MAX_STEP_SEC: f32 = 0.1; // frame deltas above this are clamped
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0;

// Floating geometry
pub const SPIN_RATE_X: f32 = 0.2; // radians per second
pub const SPIN_RATE_Y: f32 = 0.3;
pub const FLOAT_SPEED: f32 = 2.0;
pub const FLOAT_ROTATION_INTENSITY: f32 = 1.0;
pub const FLOAT_INTENSITY: f32 = 2.0;

// Message delivery (EmailJS)
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const EMAILJS_SERVICE_ID: &str = "service_sa5ffzh";
pub const EMAILJS_TEMPLATE_ID: &str = "template_ga6yu93";
pub const EMAILJS_PUBLIC_KEY: &str = "PZDrHqdj8nf186NQK";
pub const RECIPIENT_NAME: &str = "Y S Puneeth";
