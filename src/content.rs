//! Literal page content and the Tailwind class lists of each layout layer.

use crate::badge::Badge;

pub const HEADING: &str = "David Vizena";

pub const DESCRIPTION: &str = "Welcome to my portfolio project! This is a simple Hello World application \
built with React, Tailwind CSS, Docker, and deployed on Kubernetes.";

/// Rendered left to right in this order.
pub const BADGES: [Badge; 4] = [
    Badge::new("React", "bg-blue-100", "text-blue-800"),
    Badge::new("Tailwind CSS", "bg-green-100", "text-green-800"),
    Badge::new("Docker", "bg-orange-100", "text-orange-800"),
    Badge::new("Kubernetes", "bg-purple-100", "text-purple-800"),
];

// Full-viewport gradient backdrop, content centered both ways.
pub const SCREEN_CLASSES: &str =
    "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center";
pub const WRAPPER_CLASSES: &str = "max-w-4xl mx-auto px-6 text-center";
pub const CARD_CLASSES: &str =
    "bg-white rounded-2xl shadow-2xl p-12 transform hover:scale-105 transition-transform duration-300";
/// Added to the card when hover is forced on.
pub const CARD_HOVER_CLASS: &str = "scale-105";
pub const HEADING_CLASSES: &str = "text-6xl font-bold text-gray-800 mb-6";
pub const DESCRIPTION_CLASSES: &str = "text-xl text-gray-600 mb-8";
pub const BADGE_ROW_CLASSES: &str = "flex justify-center space-x-4";
pub const BADGE_CLASSES: &str = "px-4 py-2 rounded-full text-sm font-medium";
