//! Starter code seeded into the editor when a lesson is selected.

use crate::core::lesson::LessonVideo;

const PYTHON_BASICS_STARTER: &str = r#"# Python Basics - Variables and Data Types
# This code will sync with the video

# Variables
name = "Your Name"
age = 25
height = 5.8
is_learning = True

# Print statements
print("Hello, Python!")
print(f"Name: {name}")
print(f"Age: {age}")

# Try changing these values and run the code!"#;

const PYTHON_FUNCTIONS_STARTER: &str = r#"# Python Functions
# Functions help organize and reuse code

def greet_user(name):
    """Function to greet a user"""
    return f"Hello, {name}! Welcome to Python!"

def calculate_rectangle_area(length, width):
    """Calculate the area of a rectangle"""
    area = length * width
    return area

# Test the functions
user_greeting = greet_user("Python Learner")
print(user_greeting)

room_area = calculate_rectangle_area(10, 12)
print(f"Room area: {room_area} square feet")"#;

/// Pick the starter code for a newly selected lesson.
///
/// The python track carries lesson-specific starters; other lessons get a
/// template keyed off their technology tags.
pub fn starter_code(track_id: &str, video: &LessonVideo) -> String {
    if track_id == "python-fundamentals" {
        return python_starter(video);
    }

    if video.has_technology("liquid") {
        return format!(
            "<!-- Welcome to Liquid! -->\n<!-- This lesson: {} -->\n\n<!-- Your code will appear here as you watch the video -->",
            video.title
        );
    }

    if video.has_technology("react") {
        return format!(
            "// React Component Example\n// Lesson: {}\n\nfunction MyComponent() {{\n  return (\n    <div>\n      {{/* Your code will sync with the video */}}\n    </div>\n  )\n}}",
            video.title
        );
    }

    format!("<!-- {} -->\n<!-- Code will sync with video progress -->", video.title)
}

fn python_starter(video: &LessonVideo) -> String {
    match video.id.as_str() {
        "python-basics" => PYTHON_BASICS_STARTER.to_string(),
        "python-functions" => PYTHON_FUNCTIONS_STARTER.to_string(),
        _ => format!(
            "# {}\n# Python code will sync with video progress\n\nprint(\"Ready to learn Python!\")\nprint(\"Watch the video and code along!\")",
            video.title
        ),
    }
}
