// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project records and the built-in catalog.
//!
//! A project record is immutable once the catalog is built; the app only
//! ever reads from it.

use serde::{Deserialize, Serialize};

/// Separator that splits a display title from its subtitle.
const TITLE_SEPARATOR: &str = " - ";

/// Number of technologies shown in the selector summary.
const SUMMARY_TECH_COUNT: usize = 3;

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Display order matters: the first three are the selector summary.
    pub tech: Vec<String>,
    /// Web-style resource path of the preview image.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    pub highlights: Vec<String>,
}

impl Project {
    /// Title as shown in the selector: everything before the first `" - "`.
    pub fn selector_title(&self) -> &str {
        self.title
            .split(TITLE_SEPARATOR)
            .next()
            .unwrap_or(&self.title)
    }

    /// First three technologies joined with `", "`.
    pub fn tech_summary(&self) -> String {
        self.tech
            .iter()
            .take(SUMMARY_TECH_COUNT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The outbound link, if one is present and non-empty.
    pub fn link(&self) -> Option<&str> {
        self.live_link
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in project catalog, in display order.
pub fn catalog() -> Vec<Project> {
    vec![
        Project {
            title: "SoundNest – Music Streaming Platform".to_string(),
            description: "A production-grade full-stack music streaming platform designed to deliver seamless audio playback, playlist management, offline downloads, and listening analytics. The platform features secure authentication and role-based access control using Supabase Auth, enabling admin-only music uploads and personalized user playlists. Offline-first capabilities powered by IndexedDB and PWA technologies allow users to download and play tracks without an internet connection. A scalable Node.js + Express backend integrates Supabase Database and Storage to manage track metadata, audio files, waveform data, and recommendations, while a high-performance React + Vite frontend ensures a smooth and responsive user experience.".to_string(),
            tech: strings(&[
                "React",
                "Vite",
                "Node.js",
                "Express.js",
                "Supabase",
                "IndexedDB",
                "PWA",
            ]),
            image: "/images/soundnest-preview.png".to_string(),
            live_link: Some("https://soundnest-frontend.vercel.app/".to_string()),
            highlights: strings(&[
                "Secure authentication and role-based admin access",
                "Playlist management with recently played tracking",
                "Offline music downloads using IndexedDB",
                "Waveform visualization and listening analytics",
                "Scalable REST API with Supabase Database and Storage",
            ]),
        },
        Project {
            title: "Custom Portfolio CMS".to_string(),
            description: "A fully custom-built full-stack portfolio content management system designed to provide complete control over personal and professional portfolio content without relying on third-party CMS platforms. The system features a secure admin dashboard with JWT-based authentication, role-protected routes, and real-time CRUD operations for managing projects, blogs, skills, experience, services, and testimonials. A scalable Node.js and Express backend integrates Supabase PostgreSQL and Storage for structured data persistence, image uploads, and drag-and-drop ordering. The frontend delivers a modern, responsive portfolio experience built with React, Vite, and Tailwind CSS, enhanced with dark mode support, smooth animations, and CMS-driven UI updates. A live preview system enables administrators to instantly visualize content changes on the deployed frontend before publishing.".to_string(),
            tech: strings(&[
                "React",
                "Vite",
                "Node.js",
                "Express.js",
                "Supabase",
                "JWT",
                "Tailwind CSS",
                "Framer Motion",
            ]),
            image: "/images/portfolio-cms-preview.png".to_string(),
            live_link: Some("https://portfolio-frontend-iota-ebon.vercel.app/".to_string()),
            highlights: strings(&[
                "Custom-built CMS with dedicated admin dashboard",
                "JWT-based authentication and role-protected routes",
                "Image uploads and media management via Supabase Storage",
                "Drag-and-drop ordering with persistent database storage",
                "Live preview system for real-time frontend visualization",
                "Production-ready deployment using Render and Vercel",
            ]),
        },
        Project {
            title: "API Testing Tool".to_string(),
            description: "A production-grade full-stack API testing platform inspired by Postman, designed to help developers send, debug, and inspect REST APIs efficiently. The tool provides a secure authenticated workspace where users can create, test, and manage API requests across all HTTP methods with full request customization. A Node.js and Express-based proxy backend securely forwards requests, bypasses browser CORS restrictions, and validates inputs before execution. Supabase authentication and database integration enable user-scoped request history, collections, and reusable environment variables for dynamic API testing. The frontend delivers a modern developer-focused experience built with React, Vite, and Tailwind CSS, featuring a Monaco-powered JSON editor, dark/light mode, response inspection with headers and timing, and request import/export for streamlined workflows.".to_string(),
            tech: strings(&[
                "React",
                "Vite",
                "Node.js",
                "Express.js",
                "Supabase",
                "Tailwind CSS",
                "Monaco Editor",
            ]),
            image: "/images/api-testing-tool-preview.png".to_string(),
            live_link: Some("https://api-testing-tool-five.vercel.app/".to_string()),
            highlights: strings(&[
                "Postman-like API testing interface with full HTTP method support",
                "Secure proxy backend to bypass CORS and safely forward API requests",
                "Supabase authentication with user-scoped history and collections",
                "Headers, query params, environment variables, and JSON body editor",
                "Request import/export and reusable collections for productivity",
                "Production-ready deployment with frontend on Vercel and backend on Render",
            ]),
        },
    ]
}
