//! The built-in learning tracks and their lesson metadata.

use crate::core::lesson::{Difficulty, LessonVideo, VideoChapter};
use crate::core::track::{LessonTrack, SkillLevel};

use crate::library::sync_tables;

pub(crate) fn builtin_tracks() -> Vec<LessonTrack> {
    vec![python_fundamentals(), shopify_dev(), react_mastery(), web_fundamentals()]
}

fn python_fundamentals() -> LessonTrack {
    LessonTrack::new(
        "python-fundamentals",
        "Python Fundamentals",
        "Master Python from basics to advanced programming concepts",
    )
    .with_schedule("4h 30m", 20)
    .with_skill_level(SkillLevel::Mixed)
    .with_primary_tech("python")
    .with_supporting_tech(["algorithms", "data-structures", "debugging"])
    .with_videos(vec![
        LessonVideo::new(
            "python-basics",
            "Python Syntax & Variables",
            "https://www.youtube.com/embed/PkZNo7MFNFg?playsinline=1",
            "18:45",
        )
        .with_technologies(["python"])
        .with_difficulty(Difficulty::Beginner)
        .with_description("Learn Python variables, data types, and basic syntax")
        .with_chapters(vec![
            VideoChapter::new("Python Introduction", 0),
            VideoChapter::new("Variables & Types", 180),
            VideoChapter::new("Strings & Numbers", 420),
            VideoChapter::new("Input & Output", 720),
        ])
        .with_sync_points(sync_tables::python_basics()),
        LessonVideo::new(
            "python-functions",
            "Functions & Control Flow",
            "https://www.youtube.com/embed/python-functions-demo",
            "25:30",
        )
        .with_technologies(["python"])
        .with_difficulty(Difficulty::Beginner)
        .with_prerequisites(["python-basics"])
        .with_description("Master functions, if statements, loops, and program flow")
        .with_chapters(vec![
            VideoChapter::new("Defining Functions", 0),
            VideoChapter::new("Parameters & Returns", 300),
            VideoChapter::new("If Statements", 600),
            VideoChapter::new("Loops & Iteration", 900),
        ])
        .with_sync_points(sync_tables::python_functions()),
        LessonVideo::new(
            "python-data-structures",
            "Lists, Dictionaries & Data",
            "https://www.youtube.com/embed/python-data-structures",
            "32:15",
        )
        .with_technologies(["python"])
        .with_difficulty(Difficulty::Intermediate)
        .with_prerequisites(["python-basics", "python-functions"])
        .with_description("Work with lists, dictionaries, sets, and complex data structures")
        .with_chapters(vec![
            VideoChapter::new("Lists & Indexing", 0),
            VideoChapter::new("List Methods", 480),
            VideoChapter::new("Dictionaries", 960),
            VideoChapter::new("Sets & Tuples", 1440),
        ]),
        LessonVideo::new(
            "python-oop",
            "Object-Oriented Programming",
            "https://www.youtube.com/embed/python-oop-classes",
            "28:20",
        )
        .with_technologies(["python"])
        .with_difficulty(Difficulty::Intermediate)
        .with_prerequisites(["python-data-structures"])
        .with_description("Learn classes, objects, inheritance, and OOP principles")
        .with_chapters(vec![
            VideoChapter::new("Classes & Objects", 0),
            VideoChapter::new("Methods & Attributes", 420),
            VideoChapter::new("Inheritance", 840),
            VideoChapter::new("Polymorphism", 1260),
        ]),
        LessonVideo::new(
            "python-projects",
            "Real Python Projects",
            "https://www.youtube.com/embed/python-real-projects",
            "45:40",
        )
        .with_technologies(["python", "apis", "file-handling"])
        .with_difficulty(Difficulty::Advanced)
        .with_prerequisites(["python-oop"])
        .with_description("Build real-world projects: web scraper, API client, data analyzer")
        .with_chapters(vec![
            VideoChapter::new("Project Planning", 0),
            VideoChapter::new("Web Scraping", 600),
            VideoChapter::new("API Integration", 1200),
            VideoChapter::new("Data Analysis", 1800),
        ]),
    ])
}

fn shopify_dev() -> LessonTrack {
    LessonTrack::new(
        "shopify-dev",
        "Shopify Development",
        "Master Liquid templating and Shopify theme development",
    )
    .with_schedule("2h 15m", 8)
    .with_skill_level(SkillLevel::Intermediate)
    .with_primary_tech("liquid")
    .with_supporting_tech(["css", "javascript", "shopify-api"])
    .with_videos(vec![
        LessonVideo::new(
            "liquid-basics",
            "Liquid Template Language",
            "https://youtube.com/watch?v=shopify-liquid-1",
            "15:30",
        )
        .with_technologies(["liquid"])
        .with_difficulty(Difficulty::Beginner)
        .with_description("Learn Liquid syntax, variables, and filters")
        .with_chapters(vec![
            VideoChapter::new("What is Liquid?", 0),
            VideoChapter::new("Variables & Objects", 120),
            VideoChapter::new("Filters", 300),
            VideoChapter::new("Control Flow", 600),
        ])
        .with_sync_points(sync_tables::liquid_basics()),
        LessonVideo::new(
            "shopify-theme-structure",
            "Theme File Structure",
            "https://youtube.com/watch?v=shopify-theme-2",
            "18:45",
        )
        .with_technologies(["liquid", "shopify"])
        .with_difficulty(Difficulty::Beginner)
        .with_prerequisites(["liquid-basics"])
        .with_description("Understand Shopify theme architecture and file organization"),
        LessonVideo::new(
            "product-pages",
            "Building Product Pages",
            "https://youtube.com/watch?v=shopify-products-3",
            "25:20",
        )
        .with_technologies(["liquid", "css", "javascript"])
        .with_difficulty(Difficulty::Intermediate)
        .with_prerequisites(["liquid-basics", "shopify-theme-structure"])
        .with_description("Create dynamic product pages with Liquid and enhance with CSS/JS"),
    ])
}

fn react_mastery() -> LessonTrack {
    LessonTrack::new(
        "react-mastery",
        "React Mastery",
        "From basics to advanced React patterns and best practices",
    )
    .with_schedule("3h 45m", 12)
    .with_skill_level(SkillLevel::Mixed)
    .with_primary_tech("react")
    .with_supporting_tech(["javascript", "typescript", "css"])
    .with_videos(vec![
        LessonVideo::new(
            "react-fundamentals",
            "React Fundamentals",
            "https://youtube.com/watch?v=react-basics-1",
            "22:15",
        )
        .with_technologies(["react", "javascript"])
        .with_difficulty(Difficulty::Beginner)
        .with_description("Components, props, state, and event handling"),
        LessonVideo::new(
            "react-hooks",
            "React Hooks Deep Dive",
            "https://youtube.com/watch?v=react-hooks-2",
            "28:30",
        )
        .with_technologies(["react", "javascript"])
        .with_difficulty(Difficulty::Intermediate)
        .with_prerequisites(["react-fundamentals"])
        .with_description("useState, useEffect, custom hooks, and advanced patterns"),
    ])
}

fn web_fundamentals() -> LessonTrack {
    LessonTrack::new(
        "web-fundamentals",
        "Web Development Basics",
        "HTML, CSS, and JavaScript foundation for beginners",
    )
    .with_schedule("4h 20m", 15)
    .with_skill_level(SkillLevel::Beginner)
    .with_primary_tech("html")
    .with_supporting_tech(["css", "javascript"])
    .with_videos(vec![
        LessonVideo::new(
            "html-structure",
            "HTML Document Structure",
            "https://youtube.com/watch?v=html-basics-1",
            "12:45",
        )
        .with_technologies(["html"])
        .with_difficulty(Difficulty::Beginner)
        .with_description("Learn proper HTML structure and semantic elements"),
        LessonVideo::new(
            "css-styling",
            "CSS Styling Fundamentals",
            "https://youtube.com/watch?v=css-basics-1",
            "18:30",
        )
        .with_technologies(["css"])
        .with_difficulty(Difficulty::Beginner)
        .with_prerequisites(["html-structure"])
        .with_description("Selectors, properties, and layout basics"),
    ])
}
