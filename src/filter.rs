//! Half-semester partitioning by course-name markers.
//!
//! Known ambiguity: a course whose name contains a marker for reasons
//! unrelated to scheduling (e.g. an elective titled "... First Half ...")
//! is classified by that marker.

use serde::{Deserialize, Serialize};
use crate::constants::{FIRST_HALF, SECOND_HALF};
use crate::models::Course;

/// A family of mutually exclusive markers embedded in course names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerFamily {
    markers: Vec<String>,
}

impl Default for MarkerFamily {
    fn default() -> Self {
        Self::new([FIRST_HALF, SECOND_HALF])
    }
}

impl MarkerFamily {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Whether a course with this name belongs to `category`.
    ///
    /// Names carrying `category` are in; names carrying another marker of the
    /// family are out; names carrying no marker apply to every category.
    #[must_use]
    pub fn includes(&self, course_name: &str, category: &str) -> bool {
        if course_name.contains(category) {
            return true;
        }
        !self
            .markers
            .iter()
            .any(|marker| marker != category && course_name.contains(marker.as_str()))
    }

    /// Courses that apply to `category`, in catalog order
    pub fn filter_by_category<'a, I>(&self, courses: I, category: &str) -> Vec<&'a Course>
    where
        I: IntoIterator<Item = &'a Course>,
    {
        courses
            .into_iter()
            .filter(|course| self.includes(&course.name, category))
            .collect()
    }

    /// One subset per marker, in family order
    #[must_use]
    pub fn partition<'a>(&self, courses: &[&'a Course]) -> Vec<(String, Vec<&'a Course>)> {
        self.markers
            .iter()
            .map(|marker| {
                let subset = self.filter_by_category(courses.iter().copied(), marker);
                (marker.clone(), subset)
            })
            .collect()
    }
}

/// Filter with the default "First Half" / "Second Half" family
pub fn filter_by_category<'a, I>(courses: I, category: &str) -> Vec<&'a Course>
where
    I: IntoIterator<Item = &'a Course>,
{
    MarkerFamily::default().filter_by_category(courses, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str) -> Course {
        Course {
            name: name.to_string(),
            ..Course::default()
        }
    }

    fn names(courses: &[&Course]) -> Vec<String> {
        courses.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_unmarked_courses_apply_to_both_halves() {
        let catalog = vec![course("Data Structures"), course("Signals and Systems")];
        assert_eq!(filter_by_category(&catalog, FIRST_HALF).len(), 2);
        assert_eq!(filter_by_category(&catalog, SECOND_HALF).len(), 2);
    }

    #[test]
    fn test_marked_courses_stay_in_their_half() {
        let catalog = vec![
            course("Economics (First Half)"),
            course("Psychology (Second Half)"),
            course("Compilers"),
        ];

        let first = filter_by_category(&catalog, FIRST_HALF);
        assert_eq!(names(&first), ["Economics (First Half)", "Compilers"]);

        let second = filter_by_category(&catalog, SECOND_HALF);
        assert_eq!(names(&second), ["Psychology (Second Half)", "Compilers"]);
    }

    #[test]
    fn test_own_marker_wins_over_other_marker() {
        let family = MarkerFamily::default();
        let both = "Workshop (First Half, repeats Second Half)";
        assert!(family.includes(both, FIRST_HALF));
        assert!(family.includes(both, SECOND_HALF));
    }

    #[test]
    fn test_partition_uses_family_order() {
        let catalog = vec![course("Ethics (Second Half)"), course("Calculus")];
        let refs: Vec<&Course> = catalog.iter().collect();
        let parts = MarkerFamily::default().partition(&refs);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].0, FIRST_HALF);
        assert_eq!(names(&parts[0].1), ["Calculus"]);
        assert_eq!(parts[1].0, SECOND_HALF);
        assert_eq!(names(&parts[1].1), ["Ethics (Second Half)", "Calculus"]);
    }

    #[test]
    fn test_custom_family() {
        let family = MarkerFamily::new(["Block A", "Block B", "Block C"]);
        assert!(family.includes("Robotics Block B", "Block B"));
        assert!(!family.includes("Robotics Block B", "Block C"));
        assert!(family.includes("Robotics", "Block C"));
    }
}
