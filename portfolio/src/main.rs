// Portfolio page, Leptos 0.8 Edition
// Developed by Fatimah Adam (c)2025

fn main() {
    portfolio::start();
}
