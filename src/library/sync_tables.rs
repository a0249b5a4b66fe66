//! Authored sync tables for the lessons that ship with one.
//!
//! Each table is ordered by ascending timestamp; entries stay active for
//! the standard activation window once playback reaches them.

use crate::core::sync_point::{CodeCheck, SyncAction, SyncPoint};

/// "Python Syntax & Variables" (python-basics).
pub(crate) fn python_basics() -> Vec<SyncPoint> {
    vec![
        // 3 minutes in
        SyncPoint::new(180, "python-variables", SyncAction::Reveal)
            .with_code(
                r#"# Python Variables and Data Types
name = "Alice"
age = 25
height = 5.7
is_student = True

print(f"Hello, {name}!")
print(f"Age: {age}")
print(f"Height: {height} feet")
print(f"Is student: {is_student}")"#,
            )
            .with_hint("These are Python's basic data types. Try changing the values!"),
        // 7 minutes in
        SyncPoint::new(
            420,
            "python-strings",
            SyncAction::Challenge {
                check: CodeCheck::requiring(["input(", "print("]),
                success_message: "Great! You're using Python strings and input/output!".to_string(),
            },
        )
        .with_code(
            r#"# String Operations in Python
message = "Welcome to Python!"
user_name = input("What's your name? ")

# Try different string methods
print(message.upper())
print(message.lower())
print(message.replace("Python", "Programming"))

# String formatting
greeting = f"Hello {user_name}, {message}"
print(greeting)"#,
        )
        .with_hint("Experiment with string methods like .title(), .strip(), or .split()"),
        // 12 minutes in
        SyncPoint::new(720, "python-numbers", SyncAction::Explain)
            .with_code(
                r#"# Numbers and Math in Python
x = 10
y = 3

print(f"Addition: {x + y}")
print(f"Subtraction: {x - y}")
print(f"Multiplication: {x * y}")
print(f"Division: {x / y}")
print(f"Floor Division: {x // y}")
print(f"Modulus: {x % y}")
print(f"Exponent: {x ** y}")

# Working with decimals
import math
circle_radius = 5
area = math.pi * circle_radius ** 2
print(f"Circle area: {area:.2f}")"#,
            )
            .with_hint("Python has powerful math operations and the math module for advanced functions"),
    ]
}

/// "Functions & Control Flow" (python-functions).
pub(crate) fn python_functions() -> Vec<SyncPoint> {
    vec![
        // 5 minutes in
        SyncPoint::new(300, "python-functions-basic", SyncAction::Reveal)
            .with_code(
                r#"# Python Functions
def greet(name):
    """A simple greeting function"""
    return f"Hello, {name}!"

def calculate_area(length, width):
    """Calculate rectangle area"""
    area = length * width
    return area

# Using functions
message = greet("Python Learner")
print(message)

room_area = calculate_area(12, 10)
print(f"Room area: {room_area} square feet")"#,
            )
            .with_hint("Functions help organize code and make it reusable!"),
        // 10 minutes in
        SyncPoint::new(
            600,
            "python-conditionals",
            SyncAction::Challenge {
                check: CodeCheck::requiring(["if", "elif"]),
                success_message: "Excellent! You're mastering Python conditionals!".to_string(),
            },
        )
        .with_code(
            r#"# If Statements and Logic
age = int(input("Enter your age: "))

if age >= 18:
    print("You are an adult")
    if age >= 65:
        print("You qualify for senior discounts!")
elif age >= 13:
    print("You are a teenager")
else:
    print("You are a child")

# Multiple conditions
weather = input("How's the weather? (sunny/rainy/cloudy): ")
temperature = float(input("What's the temperature? "))

if weather == "sunny" and temperature > 70:
    print("Perfect day for a picnic!")
elif weather == "rainy" or temperature < 50:
    print("Better stay inside")
else:
    print("It's an okay day")"#,
        ),
    ]
}

/// "Liquid Template Language" (liquid-basics).
pub(crate) fn liquid_basics() -> Vec<SyncPoint> {
    vec![
        // 2 minutes in
        SyncPoint::new(120, "liquid-variables", SyncAction::Reveal)
            .with_code(
                r#"<!-- Liquid Variables -->
{{ product.title }}
{{ product.price }}
{{ collection.title }}"#,
            )
            .with_hint("These are basic Liquid output tags. Try adding your own!"),
        // 5 minutes in
        SyncPoint::new(
            300,
            "liquid-filters",
            SyncAction::Challenge {
                check: CodeCheck::requiring(["|", "money"]),
                success_message: "Great! You're using Liquid filters correctly!".to_string(),
            },
        )
        .with_code(
            r#"<!-- Add filters to format the data -->
{{ product.title | upcase }}
{{ product.price | money }}
{{ 'hello world' | capitalize }}"#,
        )
        .with_hint("Filters transform data. Try different filters like | downcase or | truncate: 50"),
        // 10 minutes in
        SyncPoint::new(600, "liquid-logic", SyncAction::Explain)
            .with_code(
                r#"<!-- Liquid Logic -->
{% if product.available %}
  <button>Add to Cart</button>
{% else %}
  <p>Sold Out</p>
{% endif %}

{% for variant in product.variants %}
  <option value="{{ variant.id }}">{{ variant.title }}</option>
{% endfor %}"#,
            )
            .with_hint("Liquid uses logic tags with {% %} for conditions and loops"),
    ]
}
