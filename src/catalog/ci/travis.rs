// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Travis CI catalog.

use super::super::{Catalog, VarSpec, var};

static TRAVIS_CI_VARS: &[VarSpec] = &[
    var("CI", "CI", "Indicates that the build is running in a Continuous Integration (CI) environment."),
    var("Travis", "TRAVIS", "Indicates that the build is running in the Travis CI environment."),
    var("ContinuousIntegration", "CONTINUOUS_INTEGRATION", "Also indicates the build is running in a Continuous Integration environment, similar to CI=true."),
    var("HasJoshKSealOfApproval", "HAS_JOSH_K_SEAL_OF_APPROVAL", "A humorous default variable included by Travis CI."),
    var("RailsEnv", "RAILS_ENV", "Used in Ruby on Rails builds to specify the environment as \"test\"."),
    var("RackEnv", "RACK_ENV", "Used in Rack-based Ruby applications to specify the environment as \"test\"."),
    var("MerbEnv", "MERB_ENV", "Used in Merb (another Ruby framework) builds to specify the environment as \"test\"."),
    var("JRubyOpts", "JRUBY_OPTS", "JRuby configuration options to optimize build performance."),
    var("JavaHome", "JAVA_HOME", "Set to the appropriate Java home directory based on the version being used."),
    var("TravisAllowFailure", "TRAVIS_ALLOW_FAILURE", "Indicates if the job is allowed to fail (true) or not allowed to fail (false)."),
    var("TravisAppHost", "TRAVIS_APP_HOST", "The name of the server that compiles the build script and serves helper files (e.g., gimme, nvm, sbt)."),
    var("TravisBranch", "TRAVIS_BRANCH", "For push builds or builds not triggered by a pull request, this is the name of the branch. For PR builds, it's the branch targeted by the PR."),
    var("TravisBuildDir", "TRAVIS_BUILD_DIR", "The absolute path to the directory where the repository being built is copied on the worker."),
    var("TravisBuildId", "TRAVIS_BUILD_ID", "The unique identifier for the current build, used internally by Travis CI."),
    var("TravisBuildNumber", "TRAVIS_BUILD_NUMBER", "The build number of the current build (e.g., \"4\")."),
    var("TravisBuildWebUrl", "TRAVIS_BUILD_WEB_URL", "URL to the build log."),
    var("TravisCommit", "TRAVIS_COMMIT", "The commit SHA that the current build is testing."),
    var("TravisCommitMessage", "TRAVIS_COMMIT_MESSAGE", "The commit subject and body (unwrapped), or a custom commit message if provided."),
    var("TravisCommitRange", "TRAVIS_COMMIT_RANGE", "The range of commits included in the push or pull request (empty for builds triggered by the initial commit of a new branch)."),
    var("TravisCompiler", "TRAVIS_COMPILER", "Indicates the compiler used by the current job (e.g., clang, gcc)."),
    var("TravisDebugMode", "TRAVIS_DEBUG_MODE", "Set to true if the job is running in debug mode."),
    var("TravisDist", "TRAVIS_DIST", "The distribution the current job is running on."),
    var("TravisEventType", "TRAVIS_EVENT_TYPE", "Indicates how the build was triggered (push, pull_request, api, or cron)."),
    var("TravisJobId", "TRAVIS_JOB_ID", "The unique identifier for the current job, used internally by Travis CI."),
    var("TravisJobName", "TRAVIS_JOB_NAME", "The job name if specified, otherwise an empty string."),
    var("TravisJobNumber", "TRAVIS_JOB_NUMBER", "The number of the current job (e.g., \"4.1\")."),
    var("TravisJobWebUrl", "TRAVIS_JOB_WEB_URL", "URL to the job log."),
    var("TravisOsName", "TRAVIS_OS_NAME", "Indicates the platform on which the job is running (e.g., linux, osx, windows)."),
    var("TravisCPUArch", "TRAVIS_CPU_ARCH", "Indicates the CPU architecture the job is running on (e.g., amd64, arm64, ppc64le, s390x)."),
    var("TravisOSXImage", "TRAVIS_OSX_IMAGE", "The osx_image value configured in .travis.yml, or empty if not set."),
    var("TravisPullRequest", "TRAVIS_PULL_REQUEST", "The pull request number if the current job is a pull request, or \"false\" if it’s not a pull request."),
    var("TravisPullRequestBranch", "TRAVIS_PULL_REQUEST_BRANCH", "The branch from which the pull request originated, or empty if the job is a push build."),
    var("TraivsPullRequestData", "TRAVIS_PULL_REQUEST_SHA", "The commit SHA of the HEAD commit of the pull request, or empty if the job is a push build."),
    var("TravisPullRequestSlug", "TRAVIS_PULL_REQUEST_SLUG", "The slug (in the form owner_name/repo_name) of the repository from which the PR originated, or empty if the job is a push build."),
    var("TravisPullRequestIsDraft", "TRAVIS_PULL_REQUEST_IS_DRAFT", "Set to true if the pull request is in a draft state, false otherwise. If it's a push build, the value is empty."),
    var("TravisRepoSlug", "TRAVIS_REPO_SLUG", "The slug (in the form owner_name/repo_name) of the repository currently being built."),
    var("TravisSecureEnvVars", "TRAVIS_SECURE_ENV_VARS", "Set to true if encrypted environment variables are available, false otherwise."),
    var("TravisSudo", "TRAVIS_SUDO", "Indicates whether sudo is enabled (true or false)."),
    var("TravisTestResult", "TRAVIS_TEST_RESULT", "Set to 0 if all commands in the script section have exited successfully, 1 otherwise."),
    var("TravisTag", "TRAVIS_TAG", "The tag name if the current build is for a git tag, or empty otherwise."),
    var("TravisBuildStageName", "TRAVIS_BUILD_STAGE_NAME", "The build stage name. If the build does not use build stages, this is empty."),
    var("TravisJobRestarted", "TRAVIS_JOB_RESTARTED", "Set to true if the build has been restarted, false otherwise."),
    var("TravisJobRestartedBy", "TRAVIS_JOB_RESTARTED_BY", "The username of the person who restarted the build."),
    var("TravisDartVersion", "TRAVIS_DART_VERSION", "The version of Dart used for the build."),
    var("TravisGoVersion", "TRAVIS_GO_VERSION", "The version of Go used for the build."),
    var("TravisHaxeVersion", "TRAVIS_HAXE_VERSION", "The version of Haxe used for the build."),
    var("TravisJdkVersion", "TRAVIS_JDK_VERSION", "The version of JDK used for the build."),
    var("TravisJuliaVersion", "TRAVIS_JULIA_VERSION", "The version of Julia used for the build."),
    var("TravisNodeVersion", "TRAVIS_NODE_VERSION", "The version of Node.js used for the build."),
    var("TravisOtpRelease", "TRAVIS_OTP_RELEASE", "The OTP release used for the build (for Erlang)."),
    var("TravisPerlVersion", "TRAVIS_PERL_VERSION", "The version of Perl used for the build."),
    var("TravisPHPVersion", "TRAVIS_PHP_VERSION", "The version of PHP used for the build."),
    var("TRAVIS_PYTHON_VERSION", "TRAVIS_PYTHON_VERSION", "The version of Python used for the build."),
    var("TravisRVersion", "TRAVIS_R_VERSION", "The version of R used for the build."),
    var("TravisRubyVersion", "TRAVIS_RUBY_VERSION", "The version of Ruby used for the build."),
    var("TravisRustVersion", "TRAVIS_RUST_VERSION", "The version of Rust used for the build."),
    var("TravisScalaVersion", "TRAVIS_SCALA_VERSION", "The version of Scala used for the build."),
    var("TravisMariaDBVersion", "TRAVIS_MARIADB_VERSION", "The version of MariaDB used in the build environment."),
    var("TravisXcodeSdk", "TRAVIS_XCODE_SDK", "The Xcode SDK used for Objective-C builds."),
    var("TravisXcodeScheme", "TRAVIS_XCODE_SCHEME", "The Xcode scheme used for Objective-C builds."),
    var("TravisXcodeProject", "TRAVIS_XCODE_PROJECT", "The Xcode project used for Objective-C builds."),
    var("TravisXcodeWorkspace", "TRAVIS_XCODE_WORKSPACE", "The Xcode workspace used for Objective-C builds."),
];

/// Represents a collection of environment variables used in Travis CI.
///
/// <https://docs.travis-ci.com/user/environment-variables/>
pub static TRAVIS_CI: Catalog = Catalog {
    name: "travis-ci",
    title: "Travis CI",
    docs_url: "https://docs.travis-ci.com/user/environment-variables/",
    vars: TRAVIS_CI_VARS,
    prefixes: &[],
};
