// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Azure App Service catalogs.

use super::super::{Catalog, PrefixSpec, VarSpec, deprecated, prefix, var};

static WEB_APP_VARS: &[VarSpec] = &[
    var("WebsiteSiteName", "WEBSITE_SITE_NAME", "(Configured by Azure Web Apps system only) App name."),
    var("WebsiteResourceGroup", "WEBSITE_RESOURCE_GROUP", "(Configured by Azure Web Apps system only) Azure resource group name that contains the app resource."),
    var("WebsiteOwnerName", "WEBSITE_OWNER_NAME", "(Configured by Azure Web Apps system only) Contains the Azure subscription ID that owns the app, the resource group, and the webspace."),
    var("RegionName", "REGION_NAME", "(Configured by Azure Web Apps system only) Region name of the app."),
    var("WebsitePlatformVersion", "WEBSITE_PLATFORM_VERSION", "(Configured by Azure Web Apps system only) App Service platform version."),
    var("Home", "HOME", "(Configured by Azure Web Apps system only) Path to the home directory (for example, D:\\home for Windows)."),
    var("ServerPort", "SERVER_PORT", "(Configured by Azure Web Apps system only) The port the app should listen to."),
    var("WebsiteWarmupPath", "WEBSITE_WARMUP_PATH", "A relative path to ping to warm up the app, beginning with a slash. The default is /, which pings the root path. The specific path can be pinged by an unauthenticated client, such as Azure Traffic Manager, even if App Service authentication is set to reject unauthenticated clients. (NOTE: This app setting doesn't change the path used by AlwaysOn.)"),
    var("WebsiteComputeMode", "WEBSITE_COMPUTE_MODE", "(Configured by Azure Web Apps system only) Specifies whether app runs on dedicated (Dedicated) or shared (Shared) VM/s."),
    var("WebsiteSku", "WEBSITE_SKU", "(Configured by Azure Web Apps system only) SKU of the app. Possible values are Free, Shared, Basic, and Standard."),
    var("SiteBitness", "SITE_BITNESS", "(Configured by Azure Web Apps system only) Shows whether the app is 32-bit (x86) or 64-bit (AMD64)."),
    var("WebsiteHostname", "WEBSITE_HOSTNAME", "(Configured by Azure Web Apps system only) Primary hostname for the app. Custom hostnames aren't accounted for here."),
    var("WebsiteVolumeType", "WEBSITE_VOLUME_TYPE", "(Configured by Azure Web Apps system only) Shows the storage volume type currently in use."),
    var("WebsiteNPMDefaultVersion", "WEBSITE_NPM_DEFAULT_VERSION", "Default npm version the app is using."),
    var("WebsocketConcurrentRequestLimit", "WEBSOCKET_CONCURRENT_REQUEST_LIMIT", "(Configured by Azure Web Apps system only) Limit for websocket's concurrent requests. For Standard tier and above, the value is -1, but there's still a per VM limit based on your VM size (see Cross VM Numerical Limits)."),
    var("WebsitePrivateExtensions", "WEBSITE_PRIVATE_EXTENSIONS", "Set to 0 to disable the use of private site extensions."),
    var("WebsiteTimeZone", "WEBSITE_TIME_ZONE", "By default, the time zone for the app is always UTC. You can change it to any of the valid values that are listed in Default Time Zones. If the specified value isn't recognized, UTC is used."),
    var("WebsiteAddSitenameBindingsInApphostConfig", "WEBSITE_ADD_SITENAME_BINDINGS_IN_APPHOST_CONFIG", "After slot swaps, the app may experience unexpected restarts. This is because after a swap, the hostname binding configuration goes out of sync, which by itself doesn't cause restarts. However, certain underlying storage events (such as storage volume failovers) may detect these discrepancies and force all worker processes to restart. To minimize these types of restarts, set the app setting value to 1on all slots (default is0). However, don't set this value if you're running a Windows Communication Foundation (WCF) application. For more information, see Troubleshoot swaps."),
    var("WebsiteProactiveAutohealEnabled", "WEBSITE_PROACTIVE_AUTOHEAL_ENABLED", "By default, a VM instance is proactively \"autohealed\" when it's using more than 90% of allocated memory for more than 30 seconds, or when 80% of the total requests in the last two minutes take longer than 200 seconds. If a VM instance has triggered one of these rules, the recovery process is an overlapping restart of the instance. Set to false to disable this recovery behavior. The default is true. For more information, see Proactive Auto Heal."),
    var("WebsiteProactiveCrashMonitoringEnabled", "WEBSITE_PROACTIVE_CRASHMONITORING_ENABLED", "Whenever the w3wp.exe process on a VM instance of your app crashes due to an unhandled exception for more than three times in 24 hours, a debugger process is attached to the main worker process on that instance, and collects a memory dump when the worker process crashes again. This memory dump is then analyzed and the call stack of the thread that caused the crash is logged in your App Service's logs. Set to false to disable this automatic monitoring behavior. The default is true. For more information, see Proactive Crash Monitoring."),
    var("WebsiteDAASStorageSASURI", "WEBSITE_DAAS_STORAGE_SASURI", "During crash monitoring (proactive or manual), the memory dumps are deleted by default. To save the memory dumps to a storage blob container, specify the SAS URI."),
    var("WebsiteCrashMonitoringEnabled", "WEBSITE_CRASHMONITORING_ENABLED", "Set to true to enable crash monitoring manually. You must also set WEBSITE_DAAS_STORAGE_SASURI and WEBSITE_CRASHMONITORING_SETTINGS. The default is false. This setting has no effect if remote debugging is enabled. Also, if this setting is set to true, proactive crash monitoring is disabled."),
    var("WebsiteCrashMonitoringSettings", "WEBSITE_CRASHMONITORING_SETTINGS", "A JSON with the following format:{\"StartTimeUtc\": \"2020-02-10T08:21\",\"MaxHours\": \"<elapsed-hours-from-StartTimeUtc>\",\"MaxDumpCount\": \"<max-number-of-crash-dumps>\"}. Required to configure crash monitoring if WEBSITE_CRASHMONITORING_ENABLED is specified. To only log the call stack without saving the crash dump in the storage account, add ,\"UseStorageAccount\":\"false\" in the JSON."),
    var("RemoteDebuggingVersion", "REMOTEDEBUGGINGVERSION", "Remote debugging version."),
    var("WebsiteContentAzureFileConnectionString", "WEBSITE_CONTENTAZUREFILECONNECTIONSTRING", "By default, App Service creates a shared storage for you at app creation. To use a custom storage account instead, set to the connection string of your storage account. For functions, see App settings reference for Functions."),
    var("WebsiteContentShare", "WEBSITE_CONTENTSHARE", "When you use specify a custom storage account with WEBSITE_CONTENTAZUREFILECONNECTIONSTRING, App Service creates a file share in that storage account for your app. To use a custom name, set this variable to the name you want. If a file share with the specified name doesn't exist, App Service creates it for you."),
    var("WebsiteScmAlwaysOnEnabled", "WEBSITE_SCM_ALWAYS_ON_ENABLED", "(Configured by Azure Web Apps system only) Shows whether Always On is enabled (1) or not (0)."),
    var("WebsiteScmSeparateStatus", "WEBSITE_SCM_SEPARATE_STATUS", "(Configured by Azure Web Apps system only) Shows whether the Kudu app is running in a separate process (1) or not (0)."),
    var("WebsiteDnsAttempts", "WEBSITE_DNS_ATTEMPTS", "Number of times to try name resolve."),
    var("WebsiteDnsTimeout", "WEBSITE_DNS_TIMEOUT", "Number of seconds to wait for name resolve"),
];

static WEB_APP_PREFIXES: &[PrefixSpec] = &[
    prefix("AppSettingVariables", "APPSETTING_", "Signifies that a variable is set by the customer as an app setting in the app configuration. It's injected into a .NET app as an app setting."),
    prefix("MainSiteVariables", "MAINSITE_", "Signifies a variable is specific to the app itself."),
    prefix("ScmSiteVariables", "SCMSITE_", "Signifies a variable is specific to the Kudu app."),
    prefix("SqlConnectionStringVariables", "SQLCONNSTR_", "Signifies a SQL Server connection string in the app configuration. It's injected into a .NET app as a connection string."),
    prefix("AzureSqlDatabaseConnectionStringVariables", "SQLAZURECONNSTR_", "Signifies an Azure SQL Database connection string in the app configuration. It's injected into a .NET app as a connection string."),
    prefix("PgsqlDatabaseConnectionStringVariables", "POSTGRESQLCONNSTR_", "Signifies a PostgreSQL connection string in the app configuration. It's injected into a .NET app as a connection string."),
    prefix("CustomConnectionStringVariables", "CUSTOMCONNSTR_", "Signifies a custom connection string in the app configuration. It's injected into a .NET app as a connection string."),
    prefix("MySqlConnectionStringVariables", "MYSQLCONNSTR_", "Signifies a MySQL Database connection string in the app configuration. It's injected into a .NET app as a connection string."),
    prefix("AzureFileStorageConnectionStringVariables", "AZUREFILESSTORAGE_", "A connection string to a custom share for a custom container in Azure Files."),
    prefix("AzureBlobStorageConnectionStringVariables", "AZUREBLOBSTORAGE_", "A connection string to a custom storage account for a custom container in Azure Blob Storage."),
    prefix("NotificationHubConnectionStringVariables", "NOTIFICATIONHUBCONNSTR_", "Signifies a connection string to a notification hub in Azure Notification Hubs."),
    prefix("ServiceBusConnectionStringVariables", "SERVICEBUSCONNSTR_", "Signifies a connection string to an instance of Azure Service Bus."),
    prefix("EventHubConnectionStringVariables", "EVENTHUBCONNSTR_", "Signifies a connection string to an event hub in Azure Event Hubs."),
    prefix("AzureCosmosDBConnectionStringVariables", "DOCDBCONNSTR_", "Signifies a connection string to a database in Azure Cosmos DB."),
    prefix("AzureCacheForRedisConnectionStringVariables", "REDISCACHECONNSTR_", "Signifies a connection string to a cache in Azure Cache for Redis."),
    prefix("CustomFileShareStorageConnectionStringVariables", "FILESHARESTORAGE_", "Signifies a connection string to a custom file share."),
];

/// Represents a collection of environment variables used in Azure Web Apps.
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static WEB_APP: Catalog = Catalog {
    name: "azure-web-app",
    title: "Azure App Service",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: WEB_APP_VARS,
    prefixes: WEB_APP_PREFIXES,
};

static WEB_APP_AUTH_VARS: &[VarSpec] = &[
    var("WebsiteAuthDisableIdentifyFlow", "WEBSITE_AUTH_DISABLE_IDENTITY_FLOW", "When set to true, disables assigning the thread principal identity in ASP.NET-based web applications (including v1 Function Apps). This is designed to allow developers to protect access to their site with auth, but still have it use a separate sign-in mechanism within their app logic. The default is false."),
    var("WebsiteAuthHideDeprecatedSid", "WEBSITE_AUTH_HIDE_DEPRECATED_SID", "true or false. The default value is false. This is a setting for the legacy Azure Mobile Apps integration for Azure App Service. Setting this to true resolves an issue where the SID (security ID) generated for authenticated users might change if the user changes their profile information. Changing this value may result in existing Azure Mobile Apps user IDs changing. Most apps don't need to use this setting."),
    var("WebsiteAuthNonceDuration", "WEBSITE_AUTH_NONCE_DURATION", "A timespan value in the form _hours_:_minutes_:_seconds_. The default value is 00:05:00, or 5 minutes. This setting controls the lifetime of the cryptographic nonce generated for all browser-driven logins. If a sign-in fails to complete in the specified time, the sign-in flow will be retried automatically. This application setting is intended for use with the V1 (classic) configuration experience. If using the V2 authentication configuration schema, you should instead use the login.nonce.nonceExpirationInterval configuration value."),
    var("WebsiteAuthPreserveUrlFragment", "WEBSITE_AUTH_PRESERVE_URL_FRAGMENT", "When set to true and users select on app links that contain URL fragments, the sign-in process will ensure that the URL fragment part of your URL doesn't get lost in the sign-in redirect process. For more information, see Customize sign-in and sign-out in Azure App Service authentication."),
    var("WebsiteAuthUseLegacyClaims", "WEBSITE_AUTH_USE_LEGACY_CLAIMS", "To maintain backward compatibility across upgrades, the authentication module uses the legacy claims mapping of short to long names in the /.auth/me API, so certain mappings are excluded (e.g. \"roles\"). To get the more modern version of the claims mappings, set this variable to False. In the \"roles\" example, it would be mapped to the long claim name \"http://schemas.microsoft.com/ws/2008/06/identity/claims/role\"."),
    var("WebsiteAuthDisableWWWAuthenticate", "WEBSITE_AUTH_DISABLE_WWWAUTHENTICATE", "true or false. The default value is false. When set to true, removes the WWW-Authenticate HTTP response header from module-generated HTTP 401 responses. This application setting is intended for use with the V1 (classic) configuration experience. If using the V2 authentication configuration schema, you should instead use the identityProviders.azureActiveDirectory.login.disableWwwAuthenticate configuration value."),
    var("WebsiteAuthStateDirectory", "WEBSITE_AUTH_STATE_DIRECTORY", "A local file system directory path where tokens are stored when the file-based token store is enabled. The default value is %HOME%\\Data\\.auth. This application setting is intended for use with the V1 (classic) configuration experience. If using the V2 authentication configuration schema, you should instead use the login.tokenStore.fileSystem.directory configuration value."),
    var("WebsiteAuthTokenContainerSASUrl", "WEBSITE_AUTH_TOKEN_CONTAINER_SASURL", "A fully qualified blob container URL. Instructs the auth module to store and load all encrypted tokens to the specified blob storage container instead of using the default local file system."),
    var("WebsiteAuthTokenRefreshHours", "WEBSITE_AUTH_TOKEN_REFRESH_HOURS", "Any positive decimal number. The default value is 72 (hours). This setting controls the amount of time after a session token expires that the /.auth/refresh API can be used to refresh it. Refresh attempts after this period will fail and end users will be required to sign-in again. This application setting is intended for use with the V1 (classic) configuration experience. If using the V2 authentication configuration schema, you should instead use the login.tokenStore.tokenRefreshExtensionHours configuration value."),
    var("WebsiteAuthTraceLevel", "WEBSITE_AUTH_TRACE_LEVEL", "Controls the verbosity of authentication traces written to Application Logging. Valid values are Off, Error, Warning, Information, and Verbose. The default value is Verbose."),
    var("WebsiteAuthValidateNonce", "WEBSITE_AUTH_VALIDATE_NONCE", "true or false. The default value is true. This value should never be set to false except when temporarily debugging cryptographic nonce validation failures that occur during interactive logins. This application setting is intended for use with the V1 (classic) configuration experience. If using the V2 authentication configuration schema, you should instead use the login.nonce.validateNonce configuration value."),
    var("WebsiteAuthV2ConfigJson", "WEBSITE_AUTH_V2_CONFIG_JSON", "This environment variable is populated automatically by the Azure App Service platform and is used to configure the integrated authentication module. The value of this environment variable corresponds to the V2 (non-classic) authentication configuration for the current app in Azure Resource Manager. It's not intended to be configured explicitly."),
    var("WebsiteAuthEnabled", "WEBSITE_AUTH_ENABLED", "Read-only. Injected into a Windows or Linux app to indicate whether App Service authentication is enabled."),
    var("WebsiteAuthEncryptionKey", "WEBSITE_AUTH_ENCRYPTION_KEY", "By default, the automatically generated key is used as the encryption key. To override, set to a desired key. This is recommended if you want to share tokens or sessions across multiple apps. If specified, it supersedes the MACHINEKEY_DecryptionKey setting."),
    var("WebsiteAuthSigningKey", "WEBSITE_AUTH_SIGNING_KEY", "By default, the automatically generated key is used as the signing key. To override, set to a desired key. This is recommended if you want to share tokens or sessions across multiple apps. If specified, it supersedes the MACHINEKEY_ValidationKey setting."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Authentication and Authorization)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static WEB_APP_AUTH: Catalog = Catalog {
    name: "azure-web-app-auth",
    title: "Azure App Service Authentication",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: WEB_APP_AUTH_VARS,
    prefixes: &[],
};

static WEB_APP_KEY_VAULT_REFS_VARS: &[VarSpec] = &[
    var("WebsiteKeyvaultReferences", "WEBSITE_KEYVAULT_REFERENCES", "Read-only. Contains information (including statuses) for all Key Vault references that are currently configured in the app."),
    var("WebsiteSkipContentShareValidation", "WEBSITE_SKIP_CONTENTSHARE_VALIDATION", "If you set the shared storage connection of your app (using WEBSITE_CONTENTAZUREFILECONNECTIONSTRING) to a Key Vault reference, the app can't resolve the key vault reference at app creation or update if one of the following conditions is true:"),
    var("WebsiteDelayCertDeletion", "WEBSITE_DELAY_CERT_DELETION", "This env var can be set to 1 by users in order to ensure that a certificate that a worker process is dependent upon isn't deleted until it exits."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (KeyVault References)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static WEB_APP_KEY_VAULT_REFS: Catalog = Catalog {
    name: "azure-web-app-key-vault-refs",
    title: "Azure App Service Key Vault References",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: WEB_APP_KEY_VAULT_REFS_VARS,
    prefixes: &[],
};

static WEB_APP_KUDU_VARS: &[VarSpec] = &[
    var("ScmBuildArguments", "SCM_BUILD_ARGS", "Add things at the end of the msbuild command line, such that it overrides any previous parts of the default command line."),
    var("ScmScriptGeneratorArguments", "SCM_SCRIPT_GENERATOR_ARGS", "Kudu uses the azure site deploymentscript command described here to generate a deployment script. It automatically detects the language framework type and determines the parameters to pass to the command. This setting overrides the automatically generated parameters."),
    var("ScmTraceLevel", "SCM_TRACE_LEVEL", "Build trace level. The default is 1. Set to higher values, up to 4, for more tracing."),
    var("ScmCommandIdleTimeout", "SCM_COMMAND_IDLE_TIMEOUT", "Time out in seconds for each command that the build process launches to wait before without producing any output. After that, the command is considered idle and killed. The default is 60 (one minute). In Azure, there's also a general idle request timeout that disconnects clients after 230 seconds. However, the command will still continue running server-side after that."),
    var("ScmLogstreamTimeout", "SCM_LOGSTREAM_TIMEOUT", "Time-out of inactivity in seconds before stopping log streaming. The default is 1800 (30 minutes)."),
    var("ScmSiteExtensionsFeedUrl", "SCM_SITEEXTENSIONS_FEED_URL", "URL of the site extensions gallery. The default is https://www.nuget.org/api/v2/. The URL of the old feed is http://www.siteextensions.net/api/v2/."),
    var("ScmUseLibGit2SharpRepository", "SCM_USE_LIBGIT2SHARP_REPOSITORY", "Set to 0 to use git.exe instead of libgit2sharp for git operations."),
    var("WebsiteLoadUserProfile", "WEBSITE_LOAD_USER_PROFILE", "In case of the error The specified user does not have a valid profile. during ASP.NET build automation (such as during Git deployment), set this variable to 1 to load a full user profile in the build environment. This setting is only applicable when WEBSITE_COMPUTE_MODE is Dedicated."),
    var("WebsiteScmIdleTimeoutInMinutes", "WEBSITE_SCM_IDLE_TIMEOUT_IN_MINUTES", "Time out in minutes for the SCM (Kudu) site. The default is 20."),
    var("ScmDoBuildDuringDeployment", "SCM_DO_BUILD_DURING_DEPLOYMENT", "With ZIP deploy, the deployment engine assumes that a ZIP file is ready to run as-is and doesn't run any build automation. To enable the same build automation as in Git deploy, set to true."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Kudu Build Automation)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static WEB_APP_KUDU: Catalog = Catalog {
    name: "azure-web-app-kudu",
    title: "Azure App Service Kudu",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: WEB_APP_KUDU_VARS,
    prefixes: &[],
};

static WEB_APP_LOGGING_VARS: &[VarSpec] = &[
    var("WebsiteHttpLoggingEnabled", "WEBSITE_HTTPLOGGING_ENABLED", "Read-only. Shows whether the web server logging for Windows native apps is enabled (1) or not (0)."),
    var("WebsiteHttpLoggingRetentionDays", "WEBSITE_HTTPLOGGING_RETENTION_DAYS", "Retention period in days of web server logs for Windows native apps, if web server logs are enabled."),
    var("WebsiteHttpLoggingContainerUrl", "WEBSITE_HTTPLOGGING_CONTAINER_URL", "SAS URL of the blob storage container to store web server logs for Windows native apps, if web server logs are enabled. If not set, web server logs are stored in the app's file system (default shared storage)."),
    var("DiagnosticsAzureBlobRetentionInDays", "DIAGNOSTICS_AZUREBLOBRETENTIONINDAYS", "Retention period in days of application logs for Windows native apps, if application logs are enabled."),
    var("DiagnosticsAzureBlobContainerSASUrl", "DIAGNOSTICS_AZUREBLOBCONTAINERSASURL", "SAS URL of the blob storage container to store application logs for Windows native apps, if application logs are enabled."),
    var("AppServiceAppLogsTraceLevel", "APPSERVICEAPPLOGS_TRACE_LEVEL", "Minimum log level to ship to Log Analytics for the AppServiceAppLogs log type."),
    var("DiagnosticsLastResortFile", "DIAGNOSTICS_LASTRESORTFILE", "The filename to create, or a relative path to the log directory, for logging internal errors for troubleshooting the listener. The default is logging-errors.txt."),
    var("DiagnosticsLoggingSettngsFile", "DIAGNOSTICS_LOGGINGSETTINGSFILE", "Path to the log settings file, relative to D:\\home or /home. The default is site\\diagnostics\\settings.json."),
    var("DiagnosticsTextTraceLogDirectory", "DIAGNOSTICS_TEXTTRACELOGDIRECTORY", "The log folder, relative to the app root (D:\\home\\site\\wwwroot or /home/site/wwwroot)."),
    var("DiagnosticsTextTraceMaxLogFileSizeBytes", "DIAGNOSTICS_TEXTTRACEMAXLOGFILESIZEBYTES", "Maximum size of the log file in bytes. The default is 131072 (128 KB)."),
    var("DiagnosticsTextTraceMaxLogFolderSizeBytes", "DIAGNOSTICS_TEXTTRACEMAXLOGFOLDERSIZEBYTES", "Maximum size of the log folder in bytes. The default is 1048576 (1 MB)."),
    var("DiagnosticsTextTraceMaxNumLogFiles", "DIAGNOSTICS_TEXTTRACEMAXNUMLOGFILES", "Maximum number of log files to keep. The default is 20."),
    var("DiagnosticsTextTraceTurnOffPeriod", "DIAGNOSTICS_TEXTTRACETURNOFFPERIOD", "Time out in milliseconds to keep application logging enabled. The default is 43200000 (12 hours)."),
    var("WebsiteLogBuffering", "WEBSITE_LOG_BUFFERING", "By default, log buffering is enabled. Set to 0 to disable it."),
    var("WebsiteEnablePerfMode", "WEBSITE_ENABLE_PERF_MODE", "For native Windows apps, set to TRUE to turn off IIS log entries for successful requests returned within 10 seconds. This is a quick way to do performance benchmarking by removing extended logging."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Logging)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static WEB_APP_LOGGING: Catalog = Catalog {
    name: "azure-web-app-logging",
    title: "Azure App Service Logging",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: WEB_APP_LOGGING_VARS,
    prefixes: &[],
};

static WEB_APP_MANAGED_IDENTITY_VARS: &[VarSpec] = &[
    var("IdentityEndpoint", "IDENTITY_ENDPOINT", "Read-only. The URL to retrieve the token for the app's managed identity."),
    deprecated("MSIEndpoint", "MSI_ENDPOINT", "Deprecated. Use IDENTITY_ENDPOINT."),
    var("IdentityHeader", "IDENTITY_HEADER", "Read-only. Value that must be added to the X-IDENTITY-HEADER header when making an HTTP GET request to IDENTITY_ENDPOINT. The value is rotated by the platform."),
    deprecated("MSISecret", "MSI_SECRET", "Deprecated. Use IDENTITY_HEADER."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Managed Identity)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static WEB_APP_MANAGED_IDENTITY: Catalog = Catalog {
    name: "azure-web-app-managed-identity",
    title: "Azure App Service Managed Identity",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: WEB_APP_MANAGED_IDENTITY_VARS,
    prefixes: &[],
};

static WEB_APP_NETWORKING_VARS: &[VarSpec] = &[
    var("WebsiteRelays", "WEBSITE_RELAYS", "Read-only. Data needed to configure the Hybrid Connection, including endpoints and service bus data."),
    var("WebsiteRewriteTable", "WEBSITE_REWRITE_TABLE", "Read-only. Used at runtime to do the lookups and rewrite connections appropriately."),
    var("WebsiteVnetRouteAll", "WEBSITE_VNET_ROUTE_ALL", "By default, if you use regional VNet Integration, your app only routes RFC1918 traffic into your VNet. Set to 1 to route all outbound traffic into your VNet and be subject to the same NSGs and UDRs. The setting lets you access non-RFC1918 endpoints through your VNet, secure all outbound traffic leaving your app, and force tunnel all outbound traffic to a network appliance of your own choosing."),
    var("WebsitePrivateIP", "WEBSITE_PRIVATE_IP", "Read-only. IP address associated with the app when integrated with a VNet. For Regional VNet Integration, the value is an IP from the address range of the delegated subnet, and for Gateway-required VNet Integration, the value is an IP from the address range of the point-to-site address pool configured on the Virtual Network Gateway. This IP is used by the app to connect to the resources through the VNet. Also, it can change within the described address range."),
    var("WebsitePrivatePorts", "WEBSITE_PRIVATE_PORTS", "Read-only. In VNet integration, shows which ports are useable by the app to communicate with other nodes."),
    var("WebsiteContentOverVNet", "WEBSITE_CONTENTOVERVNET", "If you are mounting an Azure File Share on the App Service and the Storage account is restricted to a VNET, ensure to enable this setting with a value of 1."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Networking)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static WEB_APP_NETWORKING: Catalog = Catalog {
    name: "azure-web-app-networking",
    title: "Azure App Service Networking",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: WEB_APP_NETWORKING_VARS,
    prefixes: &[],
};

static WEB_APP_PERF_COUNTERS_VARS: &[VarSpec] = &[
    var("WebsiteCountersAspnet", "WEBSITE_COUNTERS_ASPNET", "A JSON object containing the ASP.NET perf counters."),
    var("WebsiteCountersApp", "WEBSITE_COUNTERS_APP", "A JSON object containing sandbox counters."),
    var("WebsiteCountersClr", "WEBSITE_COUNTERS_CLR", "A JSON object containing CLR counters."),
    var("WebsiteCountersAll", "WEBSITE_COUNTERS_ALL", "A JSON object containing the combination of the other three variables."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Performance Counters)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static WEB_APP_PERF_COUNTERS: Catalog = Catalog {
    name: "azure-web-app-perf-counters",
    title: "Azure App Service Performance Counters",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: WEB_APP_PERF_COUNTERS_VARS,
    prefixes: &[],
};

static WEB_APP_PUSH_NOTIFICATIONS_VARS: &[VarSpec] = &[
    var("WebsitePushEnabled", "WEBSITE_PUSH_ENABLED", "Read-only. Added when push notifications are enabled."),
    var("WebsitePushTagWhitelist", "WEBSITE_PUSH_TAG_WHITELIST", "Read-only. Contains the tags in the notification registration."),
    var("WebsitePushTagsRequiringAuth", "WEBSITE_PUSH_TAGS_REQUIRING_AUTH", "Read-only. Contains a list of tags in the notification registration that requires user authentication."),
    var("WebsitePushTagsDynamic", "WEBSITE_PUSH_TAGS_DYNAMIC", "Read-only. Contains a list of tags in the notification registration that were added automatically."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Push Notification)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static WEB_APP_PUSH_NOTIFICATIONS: Catalog = Catalog {
    name: "azure-web-app-push-notifications",
    title: "Azure App Service Push Notifications",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: WEB_APP_PUSH_NOTIFICATIONS_VARS,
    prefixes: &[],
};

static WEB_APP_SCALING_VARS: &[VarSpec] = &[
    var("WebsiteInstanceId", "WEBSITE_INSTANCE_ID", "Read-only. Unique ID of the current VM instance, when the app is scaled out to multiple instances."),
    var("WebsiteIISSiteName", "WEBSITE_IIS_SITE_NAME", "Deprecated. Use WEBSITE_INSTANCE_ID."),
    var("WebsiteDisableOverlappedRecycling", "WEBSITE_DISABLE_OVERLAPPED_RECYCLING", "Overlapped recycling makes it so that before the current VM instance of an app is shut down, a new VM instance starts. In some cases, it can cause file locking issues. You can try turning it off by setting to 1."),
    var("WebsiteDisableCrossStampScale", "WEBSITE_DISABLE_CROSS_STAMP_SCALE", "By default, apps are allowed to scale across stamps if they use Azure Files or a Docker container. Set to 1 or true to disable cross-stamp scaling within the app's region. The default is 0. Custom Docker containers that set WEBSITES_ENABLE_APP_SERVICE_STORAGE to true or 1 can't scale cross-stamps because their content isn't completely encapsulated in the Docker container."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Scaling)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static WEB_APP_SCALING: Catalog = Catalog {
    name: "azure-web-app-scaling",
    title: "Azure App Service Scaling",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: WEB_APP_SCALING_VARS,
    prefixes: &[],
};

static WEB_APP_TLS_SSL_VARS: &[VarSpec] = &[
    var("WebsiteLoadCertificates", "WEBSITE_LOAD_CERTIFICATES", "Comma-separate thumbprint values to the certificate you want to load in your code, or * to allow all certificates to be loaded in code. Only certificates added to your app can be loaded."),
    var("WebsitePrivateCertsPath", "WEBSITE_PRIVATE_CERTS_PATH", "(Configured by Azure Web Apps system only) Path in a Windows container to the loaded private certificates."),
    var("WebsitePublicCertsPath", "WEBSITE_PUBLIC_CERTS_PATH", "(Configured by Azure Web Apps system only) Path in a Windows container to the loaded public certificates."),
    var("WebsiteIntermediateCertsPath", "WEBSITE_INTERMEDIATE_CERTS_PATH", "(Configured by Azure Web Apps system only) Path in a Windows container to the loaded intermediate certificates."),
    var("WebsiteRootCertsPath", "WEBSITE_ROOT_CERTS_PATH", "(Configured by Azure Web Apps system only) Path in a Windows container to the loaded root certificates."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (TLS/SSL)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static WEB_APP_TLS_SSL: Catalog = Catalog {
    name: "azure-web-app-tls-ssl",
    title: "Azure App Service TLS/SSL",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: WEB_APP_TLS_SSL_VARS,
    prefixes: &[],
};

static WEB_APP_WEB_JOBS_VARS: &[VarSpec] = &[
    var("WebJobsRestartTime", "WEBJOBS_RESTART_TIME", "For continuous jobs, delay in seconds when a job's process goes down for any reason before relaunching it."),
    var("WebJobsIdleTimeout", "WEBJOBS_IDLE_TIMEOUT", "For triggered jobs, timeout in seconds, after which the job is aborted if it's in idle, has no CPU time or output."),
    var("WebJobsHistorySize", "WEBJOBS_HISTORY_SIZE", "For triggered jobs, maximum number of runs kept in the history directory per job. The default is 50."),
    var("WebJobsStopped", "WEBJOBS_STOPPED", "Set to 1 to disable running any job, and stop all currently running jobs."),
    var("WebJobsDisableSchedule", "WEBJOBS_DISABLE_SCHEDULE", "Set to 1 to turn off all scheduled triggering. Jobs can still be manually invoked."),
    var("WebJobsRootPath", "WEBJOBS_ROOT_PATH", "Absolute or relative path of webjob files. For a relative path, the value is combined with the default root path (D:/home/site/wwwroot/ or /home/site/wwwroot/)."),
    var("WebJobsTriggeredJobsToAppLogs", "WEBJOBS_LOG_TRIGGERED_JOBS_TO_APP_LOGS", "Set to true to send output from triggered WebJobs to the application logs pipeline (which supports file system, blobs, and tables)."),
    var("WebJobsShutdownFile", "WEBJOBS_SHUTDOWN_FILE", "File that App Service creates when a shutdown request is detected. It's the web job process's responsibility to detect the presence of this file and initiate shutdown. When using the WebJobs SDK, this part is handled automatically."),
    var("WebJobsPath", "WEBJOBS_PATH", "Read-only. Root path of currently running job (will be under some temporary directory)."),
    var("WebJobsName", "WEBJOBS_NAME", "Read-only. Current job name."),
    var("WebJobsType", "WEBJOBS_TYPE", "Read-only. Current job type (triggered or continuous)."),
    var("WebJobsDataPath", "WEBJOBS_DATA_PATH", "Read-only. Current job metadata path to contain the job's logs, history, and any artifact of the job."),
    var("WebJobsRunId", "WEBJOBS_RUN_ID", "Read-only. For triggered jobs, current run ID of the job."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Web Jobs)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static WEB_APP_WEB_JOBS: Catalog = Catalog {
    name: "azure-web-app-web-jobs",
    title: "Azure App Service WebJobs",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: WEB_APP_WEB_JOBS_VARS,
    prefixes: &[],
};

static CACHING_VARS: &[VarSpec] = &[
    var("WebsiteLocalCacheOption", "WEBSITE_LOCAL_CACHE_OPTION", "Whether local cache is enabled. Available options are:"),
    var("WebsiteLocalCacheReadWriteOption", "WEBSITE_LOCAL_CACHE_READWRITE_OPTION", "Read-write options of the local cache. Available options are:"),
    var("WebsiteLocalCacheSizeInMB", "WEBSITE_LOCAL_CACHE_SIZEINMB", "Size of the local cache in MB. Default is 1000 (1 GB)."),
    var("WebsiteLocalCacheReady", "WEBSITE_LOCALCACHE_READY", "Read-only flag indicating if the app using local cache."),
    var("WebsiteDynamicCache", "WEBSITE_DYNAMIC_CACHE", "Due to network file shared nature to allow access for multiple instances, the dynamic cache improves performance by caching the recently accessed files locally on an instance. Cache is invalidated when file is modified. The cache location is %SYSTEMDRIVE%\\local\\DynamicCache (same %SYSTEMDRIVE%\\local quota is applied). To enable full content caching, set to 1, which includes both file content and directory/file metadata (timestamps, size, directory content). To conserve local disk use, set to 2 to cache only directory/file metadata (timestamps, size, directory content). To turn off caching, set to 0. For Windows apps and for Linux apps created with the WordPress template, the default is 1. For all other Linux apps, the default is 0."),
    var("WebsiteReadOnlyApp", "WEBSITE_READONLY_APP", "When using dynamic cache, you can disable write access to the app root (D:\\home\\site\\wwwroot or /home/site/wwwroot) by setting this variable to 1. Except for the App_Data directory, no exclusive locks are allowed, so that deployments don't get blocked by locked files."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Caching)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static CACHING: Catalog = Catalog {
    name: "azure-caching",
    title: "Azure App Service Caching",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: CACHING_VARS,
    prefixes: &[],
};

static CORS_VARS: &[VarSpec] = &[
    var("WebsiteCORSAllowedOrigins", "WEBSITE_CORS_ALLOWED_ORIGINS", "Read-only. Shows the allowed origins for CORS."),
    var("WebsiteCORSSupportCredentials", "WEBSITE_CORS_SUPPORT_CREDENTIALS", "Read-only. Shows whether setting the Access-Control-Allow-Credentials header to true is enabled (True) or not (False)."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (CORS)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static CORS: Catalog = Catalog {
    name: "azure-cors",
    title: "Azure App Service CORS",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: CORS_VARS,
    prefixes: &[],
};

static CUSTOM_CONTAINERS_VARS: &[VarSpec] = &[
    var("WebsitesEnableAppServiceStorage", "WEBSITES_ENABLE_APP_SERVICE_STORAGE", "For Linux custom containers: set to true to enable the /home directory to be shared across scaled instances. The default is false for Linux custom containers."),
    var("WebsitesContainerSTartTimeLimit", "WEBSITES_CONTAINER_START_TIME_LIMIT", "Amount of time in seconds to wait for the container to complete start-up before restarting the container. Default is 230. You can increase it up to the maximum of 1800."),
    var("WebsitesContainerStopTimeLimit", "WEBSITES_CONTAINER_STOP_TIME_LIMIT", "Amount of time in seconds to wait for the container to terminate gracefully. Default is 5. You can increase to a maximum of 120"),
    var("DockerRegistryServerUrl", "DOCKER_REGISTRY_SERVER_URL", "URL of the registry server, when running a custom container in App Service. For security, this variable isn't passed on to the container."),
    var("DockerRegistryServerUsername", "DOCKER_REGISTRY_SERVER_USERNAME", "Username to authenticate with the registry server at DOCKER_REGISTRY_SERVER_URL. For security, this variable isn't passed on to the container."),
    var("DockerRegistryServerPassword", "DOCKER_REGISTRY_SERVER_PASSWORD", "Password to authenticate with the registry server at DOCKER_REGISTRY_SERVER_URL. For security, this variable isn't passed on to the container."),
    var("DockerEnableCI", "DOCKER_ENABLE_CI", "Set to true to enable the continuous deployment for custom containers. The default is false for custom containers."),
    var("WebsitePullImageOverVirtualNetwork", "WEBSITE_PULL_IMAGE_OVER_VNET", "Connect and pull from a registry inside a Virtual Network or on-premises. Your app will need to be connected to a Virtual Network using VNet integration feature. This setting is also needed for Azure Container Registry with Private Endpoint."),
    var("WebsitesWebContainerName", "WEBSITES_WEB_CONTAINER_NAME", "In a Docker Compose app, only one of the containers can be internet accessible. Set to the name of the container defined in the configuration file to override the default container selection. By default, the internet accessible container is the first container to define port 80 or 8080, or, when no such container is found, the first container defined in the configuration file."),
    var("WebsitesPort", "WEBSITES_PORT", "For a custom container, the custom port number on the container for App Service to route requests to. By default, App Service attempts automatic port detection of ports 80 and 8080. This setting isn't injected into the container as an environment variable."),
    var("WebsiteCPUCoresLImit", "WEBSITE_CPU_CORES_LIMIT", "By default, a Windows container runs with all available cores for your chosen pricing tier. To reduce the number of cores, set to the number of desired cores limit. For more information, see Customize the number of compute cores."),
    var("WebsiteMemoryLimitMB", "WEBSITE_MEMORY_LIMIT_MB", "By default all Windows Containers deployed in Azure App Service have a memory limit configured depending on the App Service Plan SKU. Set to the desired memory limit in MB. The cumulative total of this setting across apps in the same plan must not exceed the amount allowed by the chosen pricing tier. For more information, see Customize container memory."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Custom Container)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static CUSTOM_CONTAINERS: Catalog = Catalog {
    name: "azure-custom-containers",
    title: "Azure App Service Custom Containers",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: CUSTOM_CONTAINERS_VARS,
    prefixes: &[],
};

static DEPLOYMENT_VARS: &[VarSpec] = &[
    var("DeploymentBranch", "DEPLOYMENT_BRANCH", "For local Git or cloud Git deployment (such as GitHub), set to the branch in Azure you want to deploy to. By default, it's master."),
    var("WebsiteRunFromPackage", "WEBSITE_RUN_FROM_PACKAGE", "Set to 1 to run the app from a local ZIP package, or set to the URL of an external URL to run the app from a remote ZIP package. For more information, see Run your app in Azure App Service directly from a ZIP package."),
    deprecated("WebsiteUseZip", "WEBSITE_USE_ZIP", "Deprecated. Use WEBSITE_RUN_FROM_PACKAGE."),
    deprecated("WebsiteRunFromZip", "WEBSITE_RUN_FROM_ZIP", "Deprecated. Use WEBSITE_RUN_FROM_PACKAGE."),
    var("ScmMaxZipPackageCount", "SCM_MAX_ZIP_PACKAGE_COUNT", "Your app keeps 5 of the most recent zip files deployed using zip deploy. You can keep more or less by setting the app setting to a different number."),
    var("WebsiteWebDeployUseScm", "WEBSITE_WEBDEPLOY_USE_SCM", "Set to false for WebDeploy to stop using the Kudu deployment engine. The default is true. To deploy to Linux apps using Visual Studio (WebDeploy/MSDeploy), set it to false."),
    var("MsdeployRenameLockedFiles", "MSDEPLOY_RENAME_LOCKED_FILES", "Set to 1 to attempt to rename DLLs if they can't be copied during a WebDeploy deployment. This setting isn't applicable if WEBSITE_WEBDEPLOY_USE_SCM is set to false."),
    var("WebsiteDisableScmSeparation", "WEBSITE_DISABLE_SCM_SEPARATION", "By default, the main app and the Kudu app run in different sandboxes. When you stop the app, the Kudu app is still running, and you can continue to use Git deploy and MSDeploy. Each app has its own local files. Turning off this separation (setting to true) is a legacy mode that's no longer fully supported."),
    var("WebsiteEnableSyncUpdateSite", "WEBSITE_ENABLE_SYNC_UPDATE_SITE", "Set to 1 ensure that REST API calls to update site and siteconfig are completely applied to all instances before returning. The default is 1 if deploying with an ARM template, to avoid race conditions with subsequent ARM calls."),
    var("WebsiteStartScmOnSiteCreation", "WEBSITE_START_SCM_ON_SITE_CREATION", "In an ARM template deployment, set to 1 in the ARM template to pre-start the Kudu app as part of app creation."),
    var("WebsiteStartScmWithPreload", "WEBSITE_START_SCM_WITH_PRELOAD", "For Linux apps, set to true to force preloading the Kudu app when Always On is enabled by pinging its URL. The default is false. For Windows apps, the Kudu app is always preloaded."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Deployment)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static DEPLOYMENT: Catalog = Catalog {
    name: "azure-deployment",
    title: "Azure App Service Deployment",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: DEPLOYMENT_VARS,
    prefixes: &[],
};

static DEPLOYMENT_SLOTS_VARS: &[VarSpec] = &[
    var("WebsiteOverrideStickyExtensionVersions", "WEBSITE_OVERRIDE_STICKY_EXTENSION_VERSIONS", "By default, the versions for site extensions are specific to each slot. This prevents unanticipated application behavior due to changing extension versions after a swap. If you want the extension versions to swap as well, set to 0 on all slots."),
    var("WebsiteOverridePreserveDefaultStickySlotSettings", "WEBSITE_OVERRIDE_PRESERVE_DEFAULT_STICKY_SLOT_SETTINGS", "Designates certain settings as sticky or not swappable by default. Default is true. Set this setting to false or 0 for all deployment slots to make them swappable instead. There's no fine-grain control for specific setting types."),
    var("WebsiteSwapWarmupPingPath", "WEBSITE_SWAP_WARMUP_PING_PATH", "Path to ping to warm up the target slot in a swap, beginning with a slash. The default is /, which pings the root path over HTTP."),
    var("WebsiteSwapWarmupPingStatuses", "WEBSITE_SWAP_WARMUP_PING_STATUSES", "Valid HTTP response codes for the warm-up operation during a swap. If the returned status code isn't in the list, the warmup and swap operations are stopped. By default, all response codes are valid."),
    var("WebsiteSlotNumberOfTimeoutsBeforeRestart", "WEBSITE_SLOT_NUMBER_OF_TIMEOUTS_BEFORE_RESTART", "During a slot swap, maximum number of timeouts after which we force restart the site on a specific VM instance. The default is 3."),
    var("WebsiteSlotMaxNumberOfTimeouts", "WEBSITE_SLOT_MAX_NUMBER_OF_TIMEOUTS", "During a slot swap, maximum number of timeout requests for a single URL to make before giving up. The default is 5."),
    var("WebsiteSkipAllBindingsInAppHostConfig", "WEBSITE_SKIP_ALL_BINDINGS_IN_APPHOST_CONFIG", "Set to true or 1 to skip all bindings in applicationHost.config. The default is false. If your app triggers a restart because applicationHost.config is updated with the swapped hostnames of th slots, set this variable to true to avoid a restart of this kind. If you're running a Windows Communication Foundation (WCF) app, don't set this variable."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Deployment Slot related)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static DEPLOYMENT_SLOTS: Catalog = Catalog {
    name: "azure-deployment-slots",
    title: "Azure App Service Deployment Slots",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: DEPLOYMENT_SLOTS_VARS,
    prefixes: &[],
};

static DNS_VARS: &[VarSpec] = &[
    var("WebsiteDnsServer", "WEBSITE_DNS_SERVER", "IP address of primary DNS server for outgoing connections (such as to a back-end service). The default DNS server for App Service is Azure DNS, whose IP address is 168.63.129.16. If your app uses VNet integration or is in an App Service environment, it inherits the DNS server configuration from the VNet by default."),
    var("WebsiteDnsAltServer", "WEBSITE_DNS_ALT_SERVER", "IP address of fallback DNS server for outgoing connections. See WEBSITE_DNS_SERVER."),
    var("WebsiteEnableDnsCache", "WEBSITE_ENABLE_DNS_CACHE", "Allows successful DNS resolutions to be cached. By Default expired DNS cache entries will be flushed & in addition to the existing cache to be flushed every 4.5 mins."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (DNS)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static DNS: Catalog = Catalog {
    name: "azure-dns",
    title: "Azure App Service DNS",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: DNS_VARS,
    prefixes: &[],
};

static HEALTH_CHECK_VARS: &[VarSpec] = &[
    var("WebsiteHealthcheckMaxPingFailures", "WEBSITE_HEALTHCHECK_MAXPINGFAILURES", "The maximum number of failed pings before removing the instance. Set to a value between 2 and 100. When you're scaling up or out, App Service pings the Health check path to ensure new instances are ready. For more information, see Health check."),
    var("WebsiteHealthcheckMaxUnhealthyWorkerPercent", "WEBSITE_HEALTHCHECK_MAXUNHEALTHYWORKERPERCENT", "To avoid overwhelming healthy instances, no more than half of the instances will be excluded. For example, if an App Service Plan is scaled to four instances and three are unhealthy, at most two will be excluded. The other two instances (one healthy and one unhealthy) will continue to receive requests. In the worst-case scenario where all instances are unhealthy, none will be excluded. To override this behavior, set to a value between 1 and 100. A higher value means more unhealthy instances will be removed. The default is 50 (50%)."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Health check)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static HEALTH_CHECK: Catalog = Catalog {
    name: "azure-health-check",
    title: "Azure App Service Health Check",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: HEALTH_CHECK_VARS,
    prefixes: &[],
};

static DOTNET_WEB_APP_VARS: &[VarSpec] = &[
    var("Port", "PORT", "(Configured by Azure Web Apps system only) For Linux apps, port that the .NET runtime listens to in the container."),
    var("WebsiteRoleInstanceId", "WEBSITE_ROLE_INSTANCE_ID", "(Configured by Azure Web Apps system only) ID of the current instance."),
    var("Home", "HOME", "(Configured by Azure Web Apps system only) Directory that points to shared storage (/home)."),
    var("DumpDirectory", "DUMP_DIR", "(Configured by Azure Web Apps system only) Directory for the crash dumps (/home/logs/dumps)."),
    var("AppServiceRunFromCopy", "APP_SVC_RUN_FROM_COPY", "Linux apps only. By default, the app is run from /home/site/wwwroot, a shared directory for all scaled-out instances. Set this variable to true to copy the app to a local directory in your container and run it from there. When using this option, be sure not to hard-code any reference to /home/site/wwwroot. Instead, use a path relative to /home/site/wwwroot."),
    var("MachineKeyDecryption", "MACHINEKEY_Decryption", "For Windows native apps or Windows containerized apps, this variable is injected into app environment or container to enable ASP.NET cryptographic routines (see machineKey Element. To override the default decryption value, configure it as an App Service app setting, or set it directly in the machineKey element of the Web.config file."),
    var("MachineKeyDecryptionKey", "MACHINEKEY_DecryptionKey", "For Windows native apps or Windows containerized apps, this variable is injected into the app environment or container to enable ASP.NET cryptographic routines (see machineKey Element. To override the automatically generated decryptionKey value, configure it as an App Service app setting, or set it directly in the machineKey element of the Web.config file."),
    var("MachineKeyValidation", "MACHINEKEY_Validation", "For Windows native apps or Windows containerized apps, this variable is injected into the app environment or container to enable ASP.NET cryptographic routines (see machineKey Element. To override the default validation value, configure it as an App Service app setting, or set it directly in the machineKey element of the Web.config file."),
    var("MachineKeyValidationKey", "MACHINEKEY_ValidationKey", "For Windows native apps or Windows containerized apps, this variable is injected into the app environment or container to enable ASP.NET cryptographic routines (see machineKey Element. To override the automatically generated validationKey value, configure it as an App Service app setting, or set it directly in the machineKey element of the Web.config file."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (.NET)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static DOTNET_WEB_APP: Catalog = Catalog {
    name: "azure-dotnet-web-app",
    title: "Azure App Service .NET",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: DOTNET_WEB_APP_VARS,
    prefixes: &[],
};

static JAVA_WEB_APP_VARS: &[VarSpec] = &[
    var("JavaHome", "JAVA_HOME", "Path of the Java installation directory"),
    var("AzureJavaAppPath", "AZURE_JAVA_APP_PATH", "Environment variable can be used by custom scripts so they have a location for app.jar after it's copied to local."),
    var("SkipJavaKeystoreLoad", "SKIP_JAVA_KEYSTORE_LOAD", "value of 1 to disable App Service from loading the certificates into the key store automatically"),
    var("WebsiteJavaJarFileName", "WEBSITE_JAVA_JAR_FILE_NAME", "The .jar file to use. Appends .jar if the string doesn't end in .jar. Defaults to app.jar"),
    var("WebsiteJavaWarFileName", "WEBSITE_JAVA_WAR_FILE_NAME", "The .war file to use. Appends .war if the string doesn't end in .war. Defaults to app.war"),
    var("JavaArguments", "JAVA_ARGS", "java opts required by different java webserver. Defaults to -noverify -Djava.net.preferIPv4Stack=true"),
    var("JavaWebServerPortEnvironmentVariables", "JAVA_WEBSERVER_PORT_ENVIRONMENT_VARIABLES", "environment variables used by popular Java web frameworks for server port. Some frameworks included are: Spring, Micronaut, Grails, MicroProfile Thorntail, Helidon, Ratpack, and Quarkus"),
    var("JavaTempDirectory", "JAVA_TMP_DIR", "Added to Java args as -Dsite.tempdir. Defaults to TEMP."),
    var("WebsiteSkipLocalCopy", "WEBSITE_SKIP_LOCAL_COPY", "By default, the deployed app.jar is copied from /home/site/wwwroot to a local location. To disable this behavior and load app.jar directly from /home/site/wwwroot, set this variable 1 or true. This setting has no effect if local cache is enabled."),
    var("TomcatUseStartupBat", "TOMCAT_USE_STARTUP_BAT", "Native Windows apps only. By default, the Tomcat server is started with its startup.bat. To initiate using its catalina.bat instead, set to 0 or False."),
    var("CatalinaOptions", "CATALINA_OPTS", "For Tomcat apps, environment variables to pass into the java command. Can contain system variables."),
    var("CatalinaBase", "CATALINA_BASE", "To use a custom Tomcat installation, set to the installation's location."),
    var("WebsiteJavaMaxHeapMb", "WEBSITE_JAVA_MAX_HEAP_MB", "The Java maximum heap in MB. This setting is effective only when an experimental Tomcat version is used."),
    var("WebsiteDisableJavaHeapConfiguration", "WEBSITE_DISABLE_JAVA_HEAP_CONFIGURATION", "Manually disable WEBSITE_JAVA_MAX_HEAP_MB by setting this variable to true or 1."),
    var("WebsiteAuthSkipPrincipal", "WEBSITE_AUTH_SKIP_PRINCIPAL", "By default, the following Tomcat HttpServletRequest interface are hydrated when you enable the built-in authentication: isSecure, getRemoteAddr, getRemoteHost, getScheme, getServerPort. To disable it, set to 1."),
    var("WebsiteSkipFilters", "WEBSITE_SKIP_FILTERS", "To disable all servlet filters added by App Service, set to 1."),
    var("IgnoreCatalinaBase", "IGNORE_CATALINA_BASE", "By default, App Service checks if the Tomcat variable CATALINA_BASE is defined. If not, it looks for the existence of %HOME%\\tomcat\\conf\\server.xml. If the file exists, it sets CATALINA_BASE to %HOME%\\tomcat. To disable this behavior and remove CATALINA_BASE, set this variable to 1 or true."),
    var("Port", "PORT", "(Configured by Azure Web Apps system only) For Linux apps, port that the Java runtime listens to in the container."),
    var("WildFlyVersion", "WILDFLY_VERSION", "(Configured by Azure Web Apps system only) For JBoss (Linux) apps, WildFly version."),
    var("TomcatVersion", "TOMCAT_VERSION", "(Configured by Azure Web Apps system only) For Linux Tomcat apps, Tomcat version."),
    var("JBossHome", "JBOSS_HOME", "(Configured by Azure Web Apps system only) For JBoss (Linux) apps, path of the WildFly installation."),
    var("AzureJetty9Cmdline", "AZURE_JETTY9_CMDLINE", "(Configured by Azure Web Apps system only) For native Windows apps, command-line arguments for starting Jetty 9."),
    var("AzureJetty9Home", "AZURE_JETTY9_HOME", "(Configured by Azure Web Apps system only) For native Windows apps, path to the Jetty 9 installation."),
    var("AzureJetty93Cmdline", "AZURE_JETTY93_CMDLINE", "(Configured by Azure Web Apps system only) For native Windows apps, command-line arguments for starting Jetty 9.3."),
    var("AzureJetty93Home", "AZURE_JETTY93_HOME", "(Configured by Azure Web Apps system only) For native Windows apps, path to the Jetty 9.3 installation."),
    var("AzureTomcat7Cmdline", "AZURE_TOMCAT7_CMDLINE", "(Configured by Azure Web Apps system only) For native Windows apps, command-line arguments for starting Tomcat 7."),
    var("AzureTomcat7Home", "AZURE_TOMCAT7_HOME", "(Configured by Azure Web Apps system only) For native Windows apps, path to the Tomcat 7 installation."),
    var("AzureTomcat8Cmdline", "AZURE_TOMCAT8_CMDLINE", "(Configured by Azure Web Apps system only) For native Windows apps, command-line arguments for starting Tomcat 8."),
    var("AzureTomcat8Home", "AZURE_TOMCAT8_HOME", "(Configured by Azure Web Apps system only) For native Windows apps, path to the Tomcat 8 installation."),
    var("AzureTomcat85Cmdline", "AZURE_TOMCAT85_CMDLINE", "(Configured by Azure Web Apps system only) For native Windows apps, command-line arguments for starting Tomcat 8.5."),
    var("AzureTomcat85Home", "AZURE_TOMCAT85_HOME", "(Configured by Azure Web Apps system only) For native Windows apps, path to the Tomcat 8.5 installation."),
    var("AzureTomcat90Cmdline", "AZURE_TOMCAT90_CMDLINE", "(Configured by Azure Web Apps system only) For native Windows apps, command-line arguments for starting Tomcat 9."),
    var("AzureTomcat90Home", "AZURE_TOMCAT90_HOME", "(Configured by Azure Web Apps system only) For native Windows apps, path to the Tomcat 9 installation."),
    var("AzureSiteHome", "AZURE_SITE_HOME", "The value added to the Java args as -Dsite.home. The default is the value of HOME."),
    var("HttpPlatformPort", "HTTP_PLATFORM_PORT", "Added to Java args as -Dport.http. The following environment variables used by different Java web frameworks are also set to this value: SERVER_PORT, MICRONAUT_SERVER_PORT, THORNTAIL_HTTP_PORT, RATPACK_PORT, QUARKUS_HTTP_PORT, PAYARAMICRO_PORT."),
    var("ServerPort", "SERVER_PORT", "Environment variables for Spring Boot. Environment variables set together with HTTP_PLATFORM_PORT."),
    var("MicronautServerPort", "MICRONAUT_SERVER_PORT", "Environment variables for Micronaut. Environment variables set together with HTTP_PLATFORM_PORT."),
    var("ThorntailHttpPort", "THORNTAIL_HTTP_PORT", "Environment variables for Thorntail (former WildFly Swarm). Environment variables set together with HTTP_PLATFORM_PORT."),
    var("RatpackPort", "RATPACK_PORT", "Environment variables for Ratpack. Environment variables set together with HTTP_PLATFORM_PORT."),
    var("QuarkusHttpPort", "QUARKUS_HTTP_PORT", "Environment variables for Quarkus. Environment variables set together with HTTP_PLATFORM_PORT."),
    var("PayaraMicroPort", "PAYARAMICRO_PORT", "Environment variables for Payara Micro. Environment variables set together with HTTP_PLATFORM_PORT."),
    var("AzureLoggingDirectory", "AZURE_LOGGING_DIR", "For Windows Apps, added to Java args as -Dsite.logdir. The default is %HOME%\\LogFiles\\. Default value in Linux is AZURE_LOGGING_DIR=/home/LogFiles."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Java)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static JAVA_WEB_APP: Catalog = Catalog {
    name: "azure-java-web-app",
    title: "Azure App Service Java",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: JAVA_WEB_APP_VARS,
    prefixes: &[],
};

static NODE_WEB_APP_VARS: &[VarSpec] = &[
    var("Port", "PORT", "(Configured by Azure Web Apps system only) For Linux apps, port that the Node.js app listens to in the container."),
    var("WebsiteRoleInstanceId", "WEBSITE_ROLE_INSTANCE_ID", "(Configured by Azure Web Apps system only) ID of the current instance."),
    var("Pm2Home", "PM2HOME", "The home directory for the PM2 process manager."),
    var("WebsiteNodeDefaultVersion", "WEBSITE_NODE_DEFAULT_VERSION", "For native Windows apps, default node version the app is using. Any of the supported Node.js versions can be used here."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Node.JS)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static NODE_WEB_APP: Catalog = Catalog {
    name: "azure-node-web-app",
    title: "Azure App Service Node.js",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: NODE_WEB_APP_VARS,
    prefixes: &[],
};

static PHP_WEB_APP_VARS: &[VarSpec] = &[
    var("PHPExtensions", "PHP_Extensions", "Comma-separated list of PHP extensions."),
    var("PHPZendExtensions", "PHP_ZENDEXTENSIONS", "For Linux apps, set to xdebug to use the XDebug version of the PHP container."),
    var("PHPVersion", "PHP_VERSION", "(Configured by Azure Web Apps system only) The selected PHP version."),
    var("WebsitePort", "WEBSITE_PORT", "(Configured by Azure Web Apps system only) Port that Apache server listens to in the container."),
    var("WebsiteRoleInstanceId", "WEBSITE_ROLE_INSTANCE_ID", "(Configured by Azure Web Apps system only) ID of the current instance."),
    var("WebsiteProfilerEnableTrigger", "WEBSITE_PROFILER_ENABLE_TRIGGER", "Set to TRUE to add xdebug.profiler_enable_trigger=1 and xdebug.profiler_enable=0 to the default php.ini."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (PHP)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static PHP_WEB_APP: Catalog = Catalog {
    name: "azure-php-web-app",
    title: "Azure App Service PHP",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: PHP_WEB_APP_VARS,
    prefixes: &[],
};

static PYTHON_WEB_APP_VARS: &[VarSpec] = &[
    var("AppServiceVirtualEnvironment", "APPSVC_VIRTUAL_ENV", "(Configured by Azure Web Apps system only) Specify Python virtual environment name"),
    var("Port", "PORT", "(Configured by Azure Web Apps system only) For Linux apps, port that the Python app listens to in the container."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Python)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static PYTHON_WEB_APP: Catalog = Catalog {
    name: "azure-python-web-app",
    title: "Azure App Service Python",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: PYTHON_WEB_APP_VARS,
    prefixes: &[],
};

static RUBY_WEB_APP_VARS: &[VarSpec] = &[
    var("Port", "PORT", "(Configured by Azure Web Apps system only) Port that the Rails app listens to in the container."),
    var("WebsiteRoleInstanceId", "WEBSITE_ROLE_INSTANCE_ID", "(Configured by Azure Web Apps system only) ID of the current instance."),
    var("RailsIgnoreSplash", "RAILS_IGNORE_SPLASH", "By default, a default splash page is displayed when no Gemfile is found. Set this variable to any value to disable the splash page."),
    var("BundleWithout", "BUNDLE_WITHOUT", "To add --without options to bundle install, set the variable to the groups you want to exclude, separated by space. By default, all Gems are installed."),
    var("BundleInstallLocation", "BUNDLE_INSTALL_LOCATION", "Directory to install gems. The default is /tmp/bundle."),
    var("RubySiteConfigDirectory", "RUBY_SITE_CONFIG_DIR", "Site config directory. The default is /home/site/config. The container checks for zipped gems in this directory."),
    var("SecretKeyBase", "SECRET_KEY_BASE", "By default, A random secret key base is generated. To use a custom secret key base, set this variable to the desired key base."),
    var("RailsEnv", "RAILS_ENV", "Rails environment. The default is production."),
    var("GemPristine", "GEM_PRISTINE", "Set this variable to any value to run gem pristine --all."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Ruby)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static RUBY_WEB_APP: Catalog = Catalog {
    name: "azure-ruby-web-app",
    title: "Azure App Service Ruby",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: RUBY_WEB_APP_VARS,
    prefixes: &[],
};

static WORDPRESS_WEB_APP_VARS: &[VarSpec] = &[
    var("WebsitesEnableAppServiceStorage", "WEBSITES_ENABLE_APP_SERVICE_STORAGE", "When set to TRUE, file contents are preserved during restarts."),
    var("WordPressMemoryLimit", "WP_MEMORY_LIMIT", "Frontend or general wordpress PHP memory limit (per script). Can't be more than PHP_MEMORY_LIMIT"),
    var("WordPressMaxMemoryLimit", "WP_MAX_MEMORY_LIMIT", "Admin dashboard PHP memory limit (per script). Generally Admin dashboard/ backend scripts takes lot of memory compared to frontend scripts. Can't be more than PHP_MEMORY_LIMIT."),
    var("PHPMemoryLimit", "PHP_MEMORY_LIMIT", "Memory limits for general PHP script. It can only be decreased."),
    var("FileUploads", "FILE_UPLOADS", "Can be either On or Off. Note that values are case sensitive. Enables or disables file uploads."),
    var("UploadMaxFileSize", "UPLOAD_MAX_FILESIZE", "Allowed maximum file size for upload. 256M Max file upload size limit. Can be increased up to 256M."),
    var("PostMaxSize", "POST_MAX_SIZE", "Can be increased up to 256M. Generally should be more than UPLOAD_MAX_FILESIZE."),
    var("MaxExecutionTime", "MAX_EXECUTION_TIME", "Can only be decreased. Please break down the scripts if it is taking more than 120 seconds. Added to avoid bad scripts from slowing the system."),
    var("MaxInputTime", "MAX_INPUT_TIME", "Max time limit for parsing the input requests. Can only be decreased."),
    var("MaxInputVars", "MAX_INPUT_VARS", "Max input variables for input requests. Can only be positive integer values."),
    var("DatabaseHost", "DATABASE_HOST", "Database host used to connect to WordPress."),
    var("DatabaseName", "DATABASE_NAME", "Database name used to connect to WordPress."),
    var("DatabaseUsername", "DATABASE_USERNAME", "Database username used to connect to WordPress."),
    var("DatabasePassword", "DATABASE_PASSWORD", "Database password used to connect to the MySQL database. To change the MySQL database password, see update admin password. Whenever the MySQL database password is changed, the Application Settings also need to be updated."),
    var("WordPressAdminEmail", "WORDPRESS_ADMIN_EMAIL", "WordPress admin email."),
    var("WordPressAdminPassword", "WORDPRESS_ADMIN_PASSWORD", "WordPress admin password. This is only for deployment purposes. Modifying this value has no effect on the WordPress installation. To change the WordPress admin password, see resetting your password."),
    var("WordPressAdminUser", "WORDPRESS_ADMIN_USER", "WordPress admin username"),
    var("WordPressAdminLocaleCode", "WORDPRESS_ADMIN_LOCALE_CODE", "Database username used to connect to WordPress."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (WordPress/PHP)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static WORDPRESS_WEB_APP: Catalog = Catalog {
    name: "azure-wordpress-web-app",
    title: "Azure App Service WordPress",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: WORDPRESS_WEB_APP_VARS,
    prefixes: &[],
};
