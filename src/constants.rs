/// Course code column
pub const COL_CODE: &str = "E";
pub const COL_NAME: &str = "Course Name";
pub const COL_LECTURE_HOURS: &str = "L";
pub const COL_TUTORIAL_HOURS: &str = "T";
pub const COL_PRACTICAL_HOURS: &str = "P";
pub const COL_CREDITS: &str = "C";
pub const COL_INSTRUCTORS: &str = "Name of the Instructors and Tutors";
pub const COL_LECTURE: &str = "Lecture";
pub const COL_TUTORIAL: &str = "Tutorial";
pub const COL_LAB: &str = "Lab";
pub const COL_ELECTIVE: &str = "HSS/BS elective";

/// Canonical column set, in display and export order
pub const CANONICAL_COLUMNS: [&str; 11] = [
    COL_CODE,
    COL_NAME,
    COL_LECTURE_HOURS,
    COL_TUTORIAL_HOURS,
    COL_PRACTICAL_HOURS,
    COL_CREDITS,
    COL_INSTRUCTORS,
    COL_LECTURE,
    COL_TUTORIAL,
    COL_LAB,
    COL_ELECTIVE,
];

/// Venue used when a slot line has no parenthesized venue line after it
pub const NO_VENUE: &str = "No Venue";

pub const FIRST_HALF: &str = "First Half";
pub const SECOND_HALF: &str = "Second Half";

/// Endpoint that receives the exported selection
pub const DEFAULT_SUBMIT_ENDPOINT: &str = "/save_selected_courses";

/// Grid template column holding the raw slot label (e.g. "8:00 - 8:50")
pub const GRID_LABEL_COLUMN: &str = "Slot";

pub const NO_CLASHES_MESSAGE: &str = "No clashes detected among selected courses.";
