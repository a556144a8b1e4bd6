//! Per-application plugin configuration templates.
//!
//! `{plugin}` in a body is replaced by the agent-side plugin name from the
//! catalog.

/// Registration and rendering data for one application.
#[derive(Debug)]
pub struct Template {
    pub module: &'static str,
    pub class_name: &'static str,
    collectd: &'static str,
    telegraf: &'static str,
}

impl Template {
    #[must_use]
    pub fn collectd(&self, plugin: &str) -> String {
        self.collectd.replace("{plugin}", plugin)
    }

    #[must_use]
    pub fn telegraf(&self, plugin: &str) -> String {
        self.telegraf.replace("{plugin}", plugin)
    }
}

pub const MYSQL: Template = Template {
    module: "mysql_plugin",
    class_name: "MySQLConfigurator",
    collectd: r#"LoadPlugin {plugin}
<Plugin {plugin}>
  <Database "localhost">
    Host "localhost"
    Port 3306
    InnodbStats true
  </Database>
</Plugin>
"#,
    telegraf: r#"[[inputs.{plugin}]]
  servers = ["tcp(127.0.0.1:3306)/"]
"#,
};

pub const APACHE: Template = Template {
    module: "apache_plugin",
    class_name: "ApacheConfigurator",
    collectd: r#"LoadPlugin {plugin}
<Plugin {plugin}>
  <Instance "localhost">
    URL "http://127.0.0.1/server-status?auto"
  </Instance>
</Plugin>
"#,
    telegraf: r#"[[inputs.{plugin}]]
  urls = ["http://127.0.0.1/server-status?auto"]
"#,
};

pub const NGINX: Template = Template {
    module: "nginx_plugin",
    class_name: "NGINXConfigurator",
    collectd: r#"LoadPlugin {plugin}
<Plugin {plugin}>
  URL "http://127.0.0.1/nginx_status"
</Plugin>
"#,
    telegraf: r#"[[inputs.{plugin}]]
  urls = ["http://127.0.0.1/nginx_status"]
"#,
};

pub const POSTGRESQL: Template = Template {
    module: "postgresql_plugin",
    class_name: "PostgresqlConfigurator",
    collectd: r#"LoadPlugin {plugin}
<Plugin {plugin}>
  <Database "postgres">
    Host "localhost"
    Port "5432"
  </Database>
</Plugin>
"#,
    telegraf: r#"[[inputs.{plugin}]]
  address = "host=localhost user=postgres sslmode=disable"
"#,
};

pub const REDIS: Template = Template {
    module: "redis_plugin",
    class_name: "RedisConfigurator",
    collectd: r#"LoadPlugin {plugin}
<Plugin {plugin}>
  <Node "localhost">
    Host "localhost"
    Port "6379"
  </Node>
</Plugin>
"#,
    telegraf: r#"[[inputs.{plugin}]]
  servers = ["tcp://localhost:6379"]
"#,
};

pub const MEMCACHED: Template = Template {
    module: "memcached_plugin",
    class_name: "MemcachedConfigurator",
    collectd: r#"LoadPlugin {plugin}
<Plugin {plugin}>
  <Instance "localhost">
    Host "localhost"
    Port "11211"
  </Instance>
</Plugin>
"#,
    telegraf: r#"[[inputs.{plugin}]]
  servers = ["localhost:11211"]
"#,
};

/// Every built-in template, in registration order.
pub const ALL: [&Template; 6] = [&MYSQL, &APACHE, &NGINX, &POSTGRESQL, &REDIS, &MEMCACHED];
