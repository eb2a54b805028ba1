use crate::context::{AppContext, VerbosityLevel};
use crate::format::{self, OutputFormat};
use libquay::{ModuleKind, ModuleParams, Outcome, run_module};

/// Options of the `tags` command after CLI parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagsRequest {
    pub repository: String,
    pub only_active_tags: Option<bool>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub specific_tag: Option<String>,
    /// Keep registry order instead of newest first
    pub unsorted: bool,
    pub url: Option<String>,
    pub timeout: Option<u64>,
    pub legacy_limit: bool,
}

impl TagsRequest {
    pub fn module_kind(&self) -> ModuleKind {
        if self.unsorted {
            ModuleKind::TagList
        } else {
            ModuleKind::TagInfo
        }
    }

    /// Module parameters; unset CLI flags fall back to the context config.
    pub fn module_params(&self) -> ModuleParams {
        ModuleParams {
            repository: self.repository.clone(),
            only_active_tags: self.only_active_tags,
            page: self.page,
            limit: self.limit,
            specific_tag: self.specific_tag.clone(),
            quay_url: self.url.clone(),
            timeout: self.timeout,
            legacy_limit: self.legacy_limit.then_some(true),
        }
    }
}

/// Handle the tags command, returning the process exit code.
pub async fn handle_tags(
    ctx: &AppContext,
    request: &TagsRequest,
    format: OutputFormat,
    quiet: bool,
) -> i32 {
    tracing::info!(
        "Listing tags for repository: {} ({})",
        request.repository,
        request.module_kind()
    );

    let outcome = run_module(request.module_kind(), &request.module_params(), &ctx.config).await;

    let tags = match &outcome {
        Outcome::Success(report) => &report.quay_tags,
        Outcome::Failure(failure) => {
            format::error(&failure.msg);
            for message in failure.errors.iter().filter(|m| **m != failure.msg) {
                format::error(message);
            }
            return outcome.exit_code();
        }
    };

    if ctx.verbosity >= VerbosityLevel::Verbose {
        eprintln!("Found {} tag(s) in '{}'", tags.len(), request.repository);
    }

    if quiet {
        for tag in tags {
            println!("{}", tag.name);
        }
        return 0;
    }

    if tags.is_empty() && format == OutputFormat::Pretty {
        println!("No tags found for repository '{}'.", request.repository);
        return 0;
    }

    match format::render_tags(tags, format) {
        Ok(output) => {
            println!("{}", output.trim_end());
            0
        }
        Err(e) => {
            format::error(&e);
            1
        }
    }
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
