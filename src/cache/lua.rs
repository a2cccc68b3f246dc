//! Lua scripts for the Valkey artifact cache

// Lua script to remove every key matching a glob pattern
// Walks the keyspace with SCAN so the server is never blocked by a KEYS call, and frees the
// values with UNLINK in the background
//
// ARGV[1]: glob pattern (escaped prefix followed by '*')
// ARGV[2]: SCAN COUNT hint
//
// Returns: number of keys removed
pub static INVALIDATE_PATTERN_SCRIPT: &str = r#"
local pattern = ARGV[1]
local count = tonumber(ARGV[2])
local cursor = '0'
local removed = 0

repeat
    local reply = redis.call('SCAN', cursor, 'MATCH', pattern, 'COUNT', count)
    cursor = reply[1]
    local keys = reply[2]
    if #keys > 0 then
        removed = removed + redis.call('UNLINK', unpack(keys))
    end
until cursor == '0'

return removed
"#;
