//! Matching the current page against navigation links.
//!
//! A link is active when its href equals the current file name, when the
//! path has no file name and the link is `index.html`, or when the file name
//! contains the link's href minus `.html`. The last rule is loose: a page
//! named `project-about.html` also lights up an `about.html` link.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Last `/`-separated segment of a URL path; empty for `/` or `/dir/`.
pub fn current_file(pathname: &str) -> &str {
    pathname.rsplit('/').next().unwrap_or("")
}

pub fn is_active_link(current_file: &str, href: &str) -> bool {
    if current_file == href {
        return true;
    }
    if current_file.is_empty() {
        return href == "index.html";
    }
    current_file.contains(&href.replacen(".html", "", 1))
}
